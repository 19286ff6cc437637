use crate::{workspace, Result};

use std::path::Path;

pub struct DeleteArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub id: &'a str,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: DeleteArgs<W>) -> Result<()> {
    let mut workspace = workspace::open(args.working_dir)?;

    let removed = workspace.studio.delete_palette(args.id)?;

    writeln!(args.stdout, "Deleted `{}`", removed.name)?;

    Ok(())
}
