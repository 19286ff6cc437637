use crate::output::write_palette;
use crate::{workspace, Error, Result};
use libchroma::generator::SessionError;

use std::path::Path;

pub struct LockArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    /// 1-based position, as printed by `chroma show`.
    pub position: usize,
    pub stdout: &'a mut W,
}

/// Locks or unlocks one color so regeneration leaves it alone.
pub fn run<W: std::io::Write>(args: LockArgs<W>) -> Result<()> {
    let index = args
        .position
        .checked_sub(1)
        .ok_or_else(|| Error::General(String::from("Positions start at 1")))?;

    let mut workspace = workspace::open(args.working_dir)?;

    // The session counts from 0, report the position the user typed.
    let locked = workspace.studio.toggle_lock(index).map_err(|e| match e {
        libchroma::Error::Session(SessionError::IndexOutOfRange { len, .. }) => {
            Error::General(format!(
                "No color at position {}, the palette has {} colors",
                args.position, len
            ))
        }
        e => Error::from(e),
    })?;
    let hex = &workspace.studio.session().entries()[index].hex;

    writeln!(
        args.stdout,
        "{} {}",
        if locked { "Locked" } else { "Unlocked" },
        hex
    )?;
    write_palette(args.stdout, workspace.studio.session().entries())?;

    Ok(())
}
