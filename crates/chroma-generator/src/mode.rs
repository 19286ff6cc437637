use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// How a palette is derived from its seed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationMode {
    /// Colors come from an external generative service driven by a prompt.
    Ai,
    #[default]
    Random,
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unknown generation mode `{0}`. Expected one of AI, RANDOM, MONOCHROMATIC, ANALOGOUS, COMPLEMENTARY or TRIADIC"
)]
pub struct UnknownModeError(pub String);

impl GenerationMode {
    pub const ALL: [GenerationMode; 6] = [
        GenerationMode::Ai,
        GenerationMode::Random,
        GenerationMode::Monochromatic,
        GenerationMode::Analogous,
        GenerationMode::Complementary,
        GenerationMode::Triadic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Ai => "AI",
            GenerationMode::Random => "RANDOM",
            GenerationMode::Monochromatic => "MONOCHROMATIC",
            GenerationMode::Analogous => "ANALOGOUS",
            GenerationMode::Complementary => "COMPLEMENTARY",
            GenerationMode::Triadic => "TRIADIC",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.as_str()).collect()
    }

    /// Whether the algorithmic generator ignores the seed color for this mode.
    pub fn ignores_seed(&self) -> bool {
        matches!(self, GenerationMode::Random | GenerationMode::Ai)
    }

    /// Legacy string lookup. Unrecognized names fall back to random sampling.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: UnknownModeError| {
            log::debug!("{}, using RANDOM", e);
            GenerationMode::Random
        })
    }
}

impl FromStr for GenerationMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        GenerationMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownModeError(s.to_owned()))
    }
}

impl Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("triadic".parse(), Ok(GenerationMode::Triadic));
        assert_eq!("MONOCHROMATIC".parse(), Ok(GenerationMode::Monochromatic));
        assert_eq!(" Analogous ".parse(), Ok(GenerationMode::Analogous));
        assert_eq!("ai".parse(), Ok(GenerationMode::Ai));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "pastel".parse::<GenerationMode>().unwrap_err();

        assert_eq!(err, UnknownModeError("pastel".to_string()));
        assert!(err.to_string().contains("COMPLEMENTARY"));
    }

    #[test]
    fn unknown_names_fall_back_to_random() {
        assert_eq!(GenerationMode::from_name_lossy("pastel"), GenerationMode::Random);
        assert_eq!(GenerationMode::from_name_lossy("triadic"), GenerationMode::Triadic);
    }

    #[test]
    fn serializes_as_screaming_case() {
        assert_eq!(
            serde_json::to_string(&GenerationMode::Monochromatic).unwrap(),
            "\"MONOCHROMATIC\""
        );
        assert_eq!(serde_json::to_string(&GenerationMode::Ai).unwrap(), "\"AI\"");
        assert_eq!(
            serde_json::from_str::<GenerationMode>("\"COMPLEMENTARY\"").unwrap(),
            GenerationMode::Complementary
        );
    }
}
