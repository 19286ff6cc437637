//! Color harmony generation.
//!
//! Converts between hex and HSL, derives palettes from a seed color according
//! to a [`GenerationMode`], and merges regenerated palettes with the colors a
//! user has locked.

pub mod convert;
pub mod generate;
pub mod mode;
pub mod session;

pub use convert::{
    generate_random_hex, hex_to_hsl, hsl_to_hex, is_valid_hex, luma, normalize_hex, parse_hex,
    try_hex_to_hsl, HslColor, ParseHexError,
};
pub use generate::{generate_algorithmic_palette, generate_with_rng};
pub use mode::{GenerationMode, UnknownModeError};
pub use session::{
    merge_generated_with_rng, merge_locked, GeneratorConfig, PaletteEntry, PaletteSession,
    SessionError, MAX_COLORS, MIN_COLORS,
};
