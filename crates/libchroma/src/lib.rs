#[macro_use]
extern crate indoc;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde;

pub use chroma_generator as generator;
pub use serde_json;

pub mod ai;
pub mod export;
mod font;
pub mod library;
pub mod settings;
pub mod store;
pub mod studio;

pub use ai::{GeminiSource, PaletteSource};
pub use library::{PaletteLibrary, SavedPalette};
pub use settings::{AiSettings, Settings};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use studio::Studio;

pub use chroma_generator::{GenerationMode, GeneratorConfig, PaletteEntry, PaletteSession};

use chroma_generator::{ParseHexError, SessionError};
use std::path::PathBuf;
use thiserror::Error;

pub const SETTINGS_FILE_NAME: &str = "chroma.yaml";
pub const SAVED_PALETTES_KEY: &str = "chroma_saved_palettes";
pub const SESSION_KEY: &str = "chroma_session";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid {}:\n\n{source}", .file.display())]
    InvalidSettings {
        file: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Could not serialize data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    InvalidColor(#[from] ParseHexError),
    #[error("Palette name cannot be empty")]
    EmptyName,
    #[error("The current palette has no colors")]
    EmptyPalette,
    #[error("No saved palette matches `{0}`")]
    PaletteNotFound(String),
    #[error("A prompt is required to generate a palette with AI")]
    EmptyPrompt,
    #[error("Missing API key, set the {0} environment variable")]
    MissingApiKey(String),
    #[error("Request to the generative service failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Generative service responded with status {status}: {body}")]
    AiStatus { status: u16, body: String },
    #[error("No response from the generative service")]
    EmptyAiResponse,
    #[error("Unexpected response from the generative service: {0}")]
    InvalidAiResponse(String),
}
