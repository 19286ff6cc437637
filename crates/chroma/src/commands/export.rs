use crate::output::done;
use crate::{workspace, Error, Result};
use libchroma::export::{export_labeled, export_pixel_art};

use std::path::Path;

pub const DEFAULT_EXPORT_NAME: &str = "palette";

pub struct ExportArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub name: Option<&'a str>,
    /// Write the compact 8px-per-color strip instead of labeled bars.
    pub pixel_art: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ExportArgs<W>) -> Result<()> {
    let workspace = workspace::open(args.working_dir)?;
    let colors = workspace.studio.session().hex_codes();

    let name = args.name.unwrap_or(DEFAULT_EXPORT_NAME);
    if name.trim().is_empty() {
        return Err(Error::General("Export name cannot be empty".to_owned()));
    }

    let out_dir = workspace.settings.export_path(args.working_dir);

    write!(args.stdout, "Exporting {} colors...", colors.len())?;
    let path = if args.pixel_art {
        export_pixel_art(&colors, &out_dir, name)?
    } else {
        export_labeled(&colors, &out_dir, name)?
    };
    done(args.stdout)?;

    writeln!(args.stdout, "Wrote {}", path.display())?;

    Ok(())
}
