use crate::output::done;
use crate::{Error, Result};
use libchroma::{Settings, SETTINGS_FILE_NAME};

use indoc::indoc;

use std::path::Path;

pub struct InitArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: InitArgs<W>) -> Result<()> {
    let settings_path = args.working_dir.join(SETTINGS_FILE_NAME);

    if settings_path.exists() {
        return Err(Error::General(format!(
            "{} already exists in {}",
            SETTINGS_FILE_NAME,
            args.working_dir.display()
        )));
    }

    write!(args.stdout, "Creating {}...", SETTINGS_FILE_NAME)?;
    std::fs::create_dir_all(args.working_dir)?;
    std::fs::write(settings_path, Settings::default().serialize())?;
    done(args.stdout)?;

    write!(
        args.stdout,
        "{}",
        indoc! {"
            Done! Next steps:

              chroma generate --mode analogous   create a palette
              chroma lock 2                      keep a color you like
              chroma export                      write it to palette.png
        "}
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;
    use temp_dir::TempDir;

    #[test]
    fn creates_a_chroma_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let working_dir = temp_dir.path();
        let mut fake_stdout = std::io::sink();

        let result = run(InitArgs {
            working_dir,
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let contents = read_to_string(working_dir.join("chroma.yaml")).unwrap();

        assert!(contents.starts_with("---\n"), "{}", contents);
        assert!(contents.contains("count: 5"), "{}", contents);
        assert_eq!(Settings::parse(&contents).unwrap(), Settings::default());
    }

    #[test]
    fn refuses_to_overwrite_settings() {
        let temp_dir = TempDir::new().unwrap();
        let working_dir = temp_dir.path();
        std::fs::write(working_dir.join("chroma.yaml"), "count: 9\n").unwrap();

        let result = run(InitArgs {
            working_dir,
            stdout: &mut std::io::sink(),
        });

        assert!(matches!(result, Err(Error::General(_))));
        assert_eq!(read_to_string(working_dir.join("chroma.yaml")).unwrap(), "count: 9\n");
    }

    #[test]
    fn logs_out_progress_to_stdout() {
        let temp_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        let result = run(InitArgs {
            working_dir: temp_dir.path(),
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();

        assert!(output.contains("Creating chroma.yaml"));
        assert!(output.contains("Done!"));
    }
}
