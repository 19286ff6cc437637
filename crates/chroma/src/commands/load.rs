use crate::output::write_palette;
use crate::{workspace, Result};

use std::path::Path;

pub struct LoadArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    /// Full id or a unique prefix of at least four characters.
    pub id: &'a str,
    pub stdout: &'a mut W,
}

/// Makes a saved palette the current one, with every color locked.
pub fn run<W: std::io::Write>(args: LoadArgs<W>) -> Result<()> {
    let mut workspace = workspace::open(args.working_dir)?;

    let saved = workspace.studio.load_palette(args.id)?;

    writeln!(args.stdout, "Loaded `{}`, all colors are locked", saved.name)?;
    write_palette(args.stdout, workspace.studio.session().entries())?;

    Ok(())
}
