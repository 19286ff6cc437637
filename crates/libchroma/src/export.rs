//! PNG rendering of palettes.

use crate::font::{draw_text, text_width, GLYPH_HEIGHT};
use crate::{Error, Result};
use chroma_generator::{luma, parse_hex};
use image::{ImageFormat, Rgba, RgbaImage};
use regex::Regex;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const LABELED_WIDTH: u32 = 1200;
pub const LABELED_HEIGHT: u32 = 600;
/// Side of the square drawn for each color in pixel art exports.
pub const PIXEL_SIZE: u32 = 8;

const LABEL_SCALE: u32 = 3;
/// Distance from the bottom edge of the image to the bottom of the labels.
const LABEL_MARGIN: u32 = 40;
const LUMA_THRESHOLD: f64 = 100.0;
const LIGHT_LABEL: Rgba<u8> = Rgba([255, 255, 255, 230]);
const DARK_LABEL: Rgba<u8> = Rgba([0, 0, 0, 179]);

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Label color that stays readable on top of `background`.
pub fn label_color(background: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = background.0;

    if luma(palette::Srgb::new(r, g, b)) < LUMA_THRESHOLD {
        LIGHT_LABEL
    } else {
        DARK_LABEL
    }
}

fn parse_colors(colors: &[String]) -> Result<Vec<Rgba<u8>>> {
    if colors.is_empty() {
        return Err(Error::EmptyPalette);
    }

    colors
        .iter()
        .map(|hex| {
            let rgb = parse_hex(hex.trim())?;
            Ok(Rgba([rgb.red, rgb.green, rgb.blue, 255]))
        })
        .collect()
}

/// One full-height bar per color, each labeled with its uppercase hex code.
pub fn render_labeled(colors: &[String]) -> Result<RgbaImage> {
    let fills = parse_colors(colors)?;
    let count = fills.len() as u64;
    let mut image = RgbaImage::new(LABELED_WIDTH, LABELED_HEIGHT);

    let label_top = i64::from(LABELED_HEIGHT - LABEL_MARGIN - GLYPH_HEIGHT * LABEL_SCALE);

    for (i, (hex, fill)) in colors.iter().zip(&fills).enumerate() {
        let i = i as u64;
        let left = (i * u64::from(LABELED_WIDTH) / count) as u32;
        let right = ((i + 1) * u64::from(LABELED_WIDTH) / count) as u32;

        for x in left..right {
            for y in 0..LABELED_HEIGHT {
                image.put_pixel(x, y, *fill);
            }
        }

        let label = hex.trim().to_uppercase();
        let center = i64::from(left + right) / 2;
        let label_left = center - i64::from(text_width(&label, LABEL_SCALE)) / 2;

        draw_text(
            &mut image,
            &label,
            label_left,
            label_top,
            LABEL_SCALE,
            label_color(*fill),
        );
    }

    Ok(image)
}

/// A strip of `PIXEL_SIZE` squares, one per color.
pub fn render_pixel_art(colors: &[String]) -> Result<RgbaImage> {
    let fills = parse_colors(colors)?;
    let width = fills.len() as u32 * PIXEL_SIZE;

    Ok(RgbaImage::from_fn(width, PIXEL_SIZE, |x, _| {
        fills[(x / PIXEL_SIZE) as usize]
    }))
}

pub fn export_labeled(colors: &[String], dir: &Path, name: &str) -> Result<PathBuf> {
    let image = render_labeled(colors)?;
    write_png(&image, &dir.join(format!("{}.png", file_stem(name))))
}

pub fn export_pixel_art(colors: &[String], dir: &Path, name: &str) -> Result<PathBuf> {
    let image = render_pixel_art(colors)?;
    write_png(&image, &dir.join(format!("{}_pixel.png", file_stem(name))))
}

fn file_stem(name: &str) -> String {
    WHITESPACE.replace_all(name.trim(), "_").into_owned()
}

fn write_png(image: &RgbaImage, path: &Path) -> Result<PathBuf> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes.into_inner())?;

    log::info!("Exported {}", path.display());

    Ok(path.to_path_buf())
}
