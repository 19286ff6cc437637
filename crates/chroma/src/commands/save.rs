use crate::output::write_colors;
use crate::{workspace, Result};

use std::path::Path;

pub struct SaveArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    /// Defaults to `Palette <n>`.
    pub name: Option<&'a str>,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: SaveArgs<W>) -> Result<()> {
    let mut workspace = workspace::open(args.working_dir)?;

    let name = match args.name {
        Some(name) => name.to_owned(),
        None => workspace.studio.library().suggested_name(),
    };

    let saved = workspace.studio.save_palette(&name)?;

    writeln!(args.stdout, "Saved `{}` as {}", saved.name, saved.id)?;
    write_colors(args.stdout, &saved.colors)?;

    Ok(())
}
