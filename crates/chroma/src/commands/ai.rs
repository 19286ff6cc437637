use crate::output::{done, write_palette};
use crate::{workspace, Result};
use libchroma::{GeminiSource, GenerationMode, PaletteSource};

use std::path::Path;

pub struct AiArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub prompt: &'a str,
    pub count: Option<usize>,
    pub base_color: Option<&'a str>,
    /// Defaults to Gemini, configured from `chroma.yaml`.
    pub source: Option<&'a dyn PaletteSource>,
    pub stdout: &'a mut W,
}

/// Asks a language model for a palette matching a description. Locked
/// colors are kept.
pub fn run<W: std::io::Write>(args: AiArgs<W>) -> Result<()> {
    let mut workspace = workspace::open(args.working_dir)?;

    let session = workspace.studio.session_mut();
    session.set_mode(GenerationMode::Ai);
    session.set_prompt(args.prompt);
    if let Some(count) = args.count {
        session.set_count(count);
    }
    if let Some(base_color) = args.base_color {
        session.set_base_color(base_color).map_err(libchroma::Error::from)?;
    }

    let gemini;
    let source: &dyn PaletteSource = match args.source {
        Some(source) => source,
        None => {
            gemini = GeminiSource::new(&workspace.settings.ai)?;
            &gemini
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    write!(args.stdout, "Asking for a palette...")?;
    runtime.block_on(workspace.studio.generate_with(source))?;
    done(args.stdout)?;

    write_palette(args.stdout, workspace.studio.session().entries())?;

    Ok(())
}
