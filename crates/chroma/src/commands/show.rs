use crate::output::write_palette;
use crate::{workspace, Result};

use std::path::Path;

pub struct ShowArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ShowArgs<W>) -> Result<()> {
    let workspace = workspace::open(args.working_dir)?;
    let session = workspace.studio.session();
    let config = session.config();

    writeln!(args.stdout, "Mode:       {}", config.mode)?;
    writeln!(args.stdout, "Colors:     {}", config.count)?;
    writeln!(args.stdout, "Base color: {}", config.base_color)?;
    if !config.prompt.is_empty() {
        writeln!(args.stdout, "Prompt:     {}", config.prompt)?;
    }
    writeln!(args.stdout)?;

    if session.is_empty() {
        writeln!(args.stdout, "No palette yet, run `chroma generate` to create one")?;
    } else {
        write_palette(args.stdout, session.entries())?;
    }

    Ok(())
}
