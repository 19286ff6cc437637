use crate::output::write_colors;
use crate::{workspace, Result};
use chrono::{DateTime, Local};
use owo_colors::{OwoColorize as _, Stream};

use std::path::Path;

/// Number of id characters shown. Any unique prefix works with `load` and
/// `delete`.
const SHORT_ID: usize = 8;

pub struct ListArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ListArgs<W>) -> Result<()> {
    let workspace = workspace::open(args.working_dir)?;
    let library = workspace.studio.library();

    if library.is_empty() {
        writeln!(args.stdout, "No saved palettes, run `chroma save` to add one")?;
        return Ok(());
    }

    for palette in library.list() {
        let short_id: String = palette.id.chars().take(SHORT_ID).collect();

        writeln!(
            args.stdout,
            "{}  {}  {}",
            short_id.if_supports_color(Stream::Stdout, |s| s.dimmed()),
            palette.name.if_supports_color(Stream::Stdout, |s| s.bold()),
            format_timestamp(palette.timestamp)
        )?;
        write_colors(args.stdout, &palette.colors)?;
    }

    Ok(())
}

fn format_timestamp(millis: u64) -> String {
    let time = i64::try_from(millis)
        .ok()
        .and_then(|millis| DateTime::from_timestamp_millis(millis));

    match time {
        Some(time) => time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => String::from("unknown date"),
    }
}
