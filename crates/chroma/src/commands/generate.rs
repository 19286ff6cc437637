use crate::output::write_palette;
use crate::{workspace, Result};
use libchroma::GenerationMode;

use std::path::Path;

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub mode: Option<GenerationMode>,
    pub count: Option<usize>,
    pub base_color: Option<&'a str>,
    pub stdout: &'a mut W,
}

/// Regenerates every unlocked color of the current palette.
pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    let mut workspace = workspace::open(args.working_dir)?;
    let session = workspace.studio.session_mut();

    if let Some(mode) = args.mode {
        session.set_mode(mode);
    }
    // Also covers a mode left behind by `chroma ai`.
    if session.config().mode == GenerationMode::Ai {
        log::warn!("Use `chroma ai` to generate with AI, falling back to random colors");
    }
    if let Some(count) = args.count {
        session.set_count(count);
    }
    if let Some(base_color) = args.base_color {
        session.set_base_color(base_color).map_err(libchroma::Error::from)?;
    }

    workspace.studio.regenerate()?;

    let config = workspace.studio.session().config();
    writeln!(
        args.stdout,
        "{} colors, {} mode, base color {}",
        config.count, config.mode, config.base_color
    )?;
    write_palette(args.stdout, workspace.studio.session().entries())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libchroma::{FileStore, GeneratorConfig, KeyValueStore, Studio, SESSION_KEY};
    use temp_dir::TempDir;

    fn generate(working_dir: &Path, mode: Option<GenerationMode>, count: Option<usize>) -> String {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(GenerateArgs {
            working_dir,
            mode,
            count,
            base_color: None,
            stdout: &mut fake_stdout,
        })
        .unwrap();

        String::from_utf8(fake_stdout.into_inner()).unwrap()
    }

    #[test]
    fn creates_a_palette_with_the_default_settings() {
        let temp_dir = TempDir::new().unwrap();

        let output = generate(temp_dir.path(), None, None);

        assert!(output.contains("5 colors, RANDOM mode"), "{}", output);
        assert_eq!(output.matches('#').count(), 6, "{}", output);

        let store = FileStore::new(temp_dir.path().join(".chroma"));
        assert!(store.get(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn honors_chroma_yaml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("chroma.yaml"),
            "count: 3\nmode: monochromatic\nbase_color: \"#10b981\"\ndata_dir: state\n",
        )
        .unwrap();

        let output = generate(temp_dir.path(), None, None);

        assert!(output.contains("3 colors, MONOCHROMATIC mode, base color #10b981"), "{}", output);
        assert!(temp_dir.path().join("state").join("chroma_session.json").exists());
    }

    #[test]
    fn keeps_locked_colors() {
        let temp_dir = TempDir::new().unwrap();
        generate(temp_dir.path(), None, Some(4));

        let store = FileStore::new(temp_dir.path().join(".chroma"));
        let mut studio = Studio::open(store, GeneratorConfig::default());
        studio.toggle_lock(2).unwrap();
        let locked = studio.session().entries()[2].clone();

        let output = generate(temp_dir.path(), Some(GenerationMode::Triadic), None);

        let line = output.lines().find(|l| l.contains(" 3. ")).unwrap();
        assert!(line.contains(&locked.hex), "{}", output);
        assert!(line.contains("locked"), "{}", output);
    }

    #[test]
    fn a_stored_ai_mode_still_regenerates() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join(".chroma"));
        let mut studio = Studio::open(store, GeneratorConfig::default());
        studio.session_mut().set_mode(GenerationMode::Ai);
        studio.regenerate().unwrap();
        let before = studio.session().hex_codes();

        let output = generate(temp_dir.path(), None, None);

        assert!(output.contains("5 colors, AI mode"), "{}", output);
        let store = FileStore::new(temp_dir.path().join(".chroma"));
        let after = Studio::open(store, GeneratorConfig::default()).session().hex_codes();
        assert_eq!(after.len(), 5);
        assert_ne!(after, before);
    }

    #[test]
    fn rejects_invalid_base_colors() {
        let temp_dir = TempDir::new().unwrap();

        let result = run(GenerateArgs {
            working_dir: temp_dir.path(),
            mode: Some(GenerationMode::Analogous),
            count: None,
            base_color: Some("#nothex"),
            stdout: &mut std::io::sink(),
        });

        assert!(result.is_err());
    }
}
