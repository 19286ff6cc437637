//! Settings for a palette workspace backed by a `chroma.yaml` file.
use crate::{Error, Result, SETTINGS_FILE_NAME};
use chroma_generator::session::{DEFAULT_BASE_COLOR, DEFAULT_COLORS};
use chroma_generator::{normalize_hex, GenerationMode, GeneratorConfig, ParseHexError};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Content of the `chroma.yaml` file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of colors in a freshly created palette.
    pub count: usize,
    #[serde(deserialize_with = "deserialize_mode")]
    pub mode: GenerationMode,
    pub base_color: String,
    /// Where the current session and saved palettes are kept, relative to
    /// the working directory.
    pub data_dir: PathBuf,
    /// Where exported images are written, relative to the working directory.
    pub export_dir: PathBuf,
    pub ai: AiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            count: DEFAULT_COLORS,
            mode: GenerationMode::Random,
            base_color: DEFAULT_BASE_COLOR.to_owned(),
            data_dir: PathBuf::from(".chroma"),
            export_dir: PathBuf::from("."),
            ai: AiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub model: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never lives in `chroma.yaml`.
    pub api_key_env: String,
    pub endpoint: String,
    pub temperature: f32,
}

impl Default for AiSettings {
    fn default() -> Self {
        AiSettings {
            model: "gemini-2.5-flash".to_owned(),
            api_key_env: "API_KEY".to_owned(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            temperature: 0.7,
        }
    }
}

/// Accepts mode names in any letter case, e.g. `triadic` or `TRIADIC`.
/// Unknown names fall back to random generation.
fn deserialize_mode<'de, D>(deserializer: D) -> std::result::Result<GenerationMode, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    match name.parse() {
        Ok(mode) => Ok(mode),
        Err(e) => {
            log::warn!("{} in {}, using {}", e, SETTINGS_FILE_NAME, GenerationMode::Random);
            Ok(GenerationMode::Random)
        }
    }
}

impl Settings {
    pub fn parse(input: &str) -> Result<Self> {
        use serde_yaml::Value;

        let invalid = |e| Error::InvalidSettings {
            file: PathBuf::from(SETTINGS_FILE_NAME),
            source: e,
        };

        // An empty file, or one holding only `---`, is a null document.
        let value: Value = serde_yaml::from_str(input).map_err(invalid)?;
        if value.is_null() {
            return Ok(Settings::default());
        }

        let mut settings: Settings = serde_yaml::from_value(value).map_err(invalid)?;

        settings.base_color = normalize_hex(&settings.base_color)
            .ok_or_else(|| ParseHexError(settings.base_color.clone()))?;

        Ok(settings)
    }

    /// Reads `chroma.yaml` from `working_dir`, falling back to defaults when
    /// the file doesn't exist.
    pub fn load(working_dir: &Path) -> Result<Self> {
        let path = working_dir.join(SETTINGS_FILE_NAME);

        if !path.exists() {
            log::debug!("No {} found in {}, using defaults", SETTINGS_FILE_NAME, working_dir.display());
            return Ok(Settings::default());
        }

        Settings::parse(&std::fs::read_to_string(path)?)
    }

    pub fn serialize(&self) -> String {
        format!("---\n{}", serde_yaml::to_string(self).unwrap_or_default())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.count,
            mode: self.mode,
            base_color: self.base_color.clone(),
            prompt: String::new(),
        }
    }

    pub fn data_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.data_dir)
    }

    pub fn export_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.export_dir)
    }
}
