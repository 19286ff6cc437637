//! Palette state carried between regenerations.
//!
//! The merge policy lives in [`merge_locked`], a pure function of the
//! previous entries and the freshly generated colors, so it can be driven by
//! any front end. [`PaletteSession`] wraps it together with the generator
//! configuration.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::{generate_random_hex_with, is_valid_hex, normalize_hex, ParseHexError};
use crate::generate::generate_with_rng;
use crate::mode::GenerationMode;

pub const MIN_COLORS: usize = 1;
pub const MAX_COLORS: usize = 30;
pub const DEFAULT_COLORS: usize = 5;
pub const DEFAULT_BASE_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub hex: String,
    pub locked: bool,
}

impl PaletteEntry {
    pub fn unlocked(hex: impl Into<String>) -> Self {
        PaletteEntry {
            hex: hex.into(),
            locked: false,
        }
    }

    pub fn locked(hex: impl Into<String>) -> Self {
        PaletteEntry {
            hex: hex.into(),
            locked: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub count: usize,
    pub mode: GenerationMode,
    pub base_color: String,
    /// Only used by [`GenerationMode::Ai`].
    #[serde(default)]
    pub prompt: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: DEFAULT_COLORS,
            mode: GenerationMode::Random,
            base_color: DEFAULT_BASE_COLOR.to_owned(),
            prompt: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No color at position {index}, the palette has {len} colors")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    InvalidColor(#[from] ParseHexError),
    #[error("Cannot apply an empty palette")]
    EmptyPalette,
}

/// Combines the previous palette with newly generated colors.
///
/// The result always has exactly `count` entries. A locked previous entry is
/// kept as is. Positions covered by the previous palette (or every position,
/// when there is no previous palette) take the generated color. Positions
/// past the end of a non-empty previous palette, or past the end of
/// `generated`, are filled with plain random colors rather than derived ones.
pub fn merge_locked(
    previous: &[PaletteEntry],
    generated: &[String],
    count: usize,
) -> Vec<PaletteEntry> {
    merge_locked_with_rng(previous, generated, count, &mut rand::thread_rng())
}

pub fn merge_locked_with_rng<R: Rng + ?Sized>(
    previous: &[PaletteEntry],
    generated: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<PaletteEntry> {
    merge_entries(previous, generated, count, previous.is_empty(), rng)
}

/// Merge policy for colors that come from outside the algorithmic
/// generator. Locked previous entries still win, but every other position
/// takes the matching generated color. Random colors only fill positions
/// past the end of `generated`.
pub fn merge_generated_with_rng<R: Rng + ?Sized>(
    previous: &[PaletteEntry],
    generated: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<PaletteEntry> {
    merge_entries(previous, generated, count, true, rng)
}

fn merge_entries<R: Rng + ?Sized>(
    previous: &[PaletteEntry],
    generated: &[String],
    count: usize,
    pad_from_generated: bool,
    rng: &mut R,
) -> Vec<PaletteEntry> {
    (0..count)
        .map(|i| match (previous.get(i), generated.get(i)) {
            (Some(entry), _) if entry.locked => entry.clone(),
            (Some(_), Some(hex)) => PaletteEntry::unlocked(hex.clone()),
            (None, Some(hex)) if pad_from_generated => PaletteEntry::unlocked(hex.clone()),
            _ => PaletteEntry::unlocked(generate_random_hex_with(rng)),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaletteSession {
    entries: Vec<PaletteEntry>,
    config: GeneratorConfig,
}

impl PaletteSession {
    pub fn new(config: GeneratorConfig) -> Self {
        let mut session = PaletteSession {
            entries: Vec::new(),
            config,
        };
        session.set_count(session.config.count);
        session
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn hex_codes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.hex.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every entry holds a canonical hex color and that the
    /// count is in the supported range. Used after deserializing a session
    /// from untrusted storage.
    pub fn is_well_formed(&self) -> bool {
        (MIN_COLORS..=MAX_COLORS).contains(&self.config.count)
            && self.entries.len() <= MAX_COLORS
            && self.entries.iter().all(|e| is_valid_hex(&e.hex))
            && is_valid_hex(&self.config.base_color)
    }

    pub fn regenerate(&mut self) {
        self.regenerate_with_rng(&mut rand::thread_rng())
    }

    pub fn regenerate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let seed = if self.config.mode == GenerationMode::Random {
            generate_random_hex_with(rng)
        } else {
            self.config.base_color.clone()
        };

        let generated = generate_with_rng(&seed, self.config.mode, self.config.count, rng);

        log::debug!(
            "Regenerated {} colors in {} mode from seed {}",
            generated.len(),
            self.config.mode,
            seed
        );

        self.entries = merge_locked_with_rng(&self.entries, &generated, self.config.count, rng);
    }

    /// Merges colors produced outside of the algorithmic generator, such as
    /// an AI service. Locked entries are kept, see [`merge_generated_with_rng`].
    pub fn apply_generated(&mut self, colors: &[String]) -> Result<(), SessionError> {
        self.apply_generated_with_rng(colors, &mut rand::thread_rng())
    }

    pub fn apply_generated_with_rng<R: Rng + ?Sized>(
        &mut self,
        colors: &[String],
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if colors.is_empty() {
            return Err(SessionError::EmptyPalette);
        }

        let colors = colors
            .iter()
            .map(|c| normalize_hex(c).ok_or_else(|| ParseHexError(c.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        self.entries = merge_generated_with_rng(&self.entries, &colors, self.config.count, rng);

        Ok(())
    }

    /// Flips the lock on one entry and returns its new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, SessionError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;

        entry.locked = !entry.locked;

        Ok(entry.locked)
    }

    /// Replaces the palette with `colors`, all locked, and makes the
    /// configured count match.
    pub fn load_palette(&mut self, colors: &[String]) {
        self.entries = colors.iter().cloned().map(PaletteEntry::locked).collect();
        self.config.count = self.entries.len();
    }

    /// Sets the requested number of colors, clamped to the supported range.
    pub fn set_count(&mut self, count: usize) -> usize {
        let clamped = count.clamp(MIN_COLORS, MAX_COLORS);

        if clamped != count {
            log::warn!(
                "{} colors requested, using {} (supported range is {}-{})",
                count,
                clamped,
                MIN_COLORS,
                MAX_COLORS
            );
        }

        self.config.count = clamped;
        clamped
    }

    pub fn set_mode(&mut self, mode: GenerationMode) {
        self.config.mode = mode;
    }

    pub fn set_base_color(&mut self, hex: &str) -> Result<(), SessionError> {
        self.config.base_color = normalize_hex(hex).ok_or_else(|| ParseHexError(hex.to_owned()))?;

        Ok(())
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.config.prompt = prompt.into();
    }
}
