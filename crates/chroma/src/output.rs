use crate::Result;
use libchroma::generator::parse_hex;
use libchroma::PaletteEntry;
use owo_colors::{OwoColorize as _, Stream};
use std::io::Write;

/// A block of terminal background color. Plain spaces when colors are off.
pub(crate) fn swatch(hex: &str) -> String {
    let (r, g, b) = parse_hex(hex)
        .map(|c| (c.red, c.green, c.blue))
        .unwrap_or((0, 0, 0));

    "    "
        .if_supports_color(Stream::Stdout, |s| s.on_truecolor(r, g, b))
        .to_string()
}

pub(crate) fn write_palette<W: Write>(out: &mut W, entries: &[PaletteEntry]) -> Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        write!(out, "{} {:>2}. {}", swatch(&entry.hex), i + 1, entry.hex)?;

        if entry.locked {
            write!(
                out,
                " {}",
                "locked".if_supports_color(Stream::Stdout, |s| s.yellow())
            )?;
        }

        writeln!(out)?;
    }

    Ok(())
}

pub(crate) fn write_colors<W: Write>(out: &mut W, colors: &[String]) -> Result<()> {
    let line: String = colors.iter().map(|hex| swatch(hex)).collect();

    writeln!(out, "    {}", line)?;

    Ok(())
}

pub(crate) fn done<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )?;

    Ok(())
}
