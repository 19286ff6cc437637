#![allow(dead_code)]

use libchroma::{FileStore, Settings, Studio, SETTINGS_FILE_NAME};
use std::path::Path;
use temp_dir::TempDir;

/// A temporary working directory with an optional `chroma.yaml`.
#[derive(Default)]
pub struct WorkspaceBuilder {
    settings: Option<String>,
}

impl WorkspaceBuilder {
    pub fn with_settings(mut self, yaml: &str) -> Self {
        self.settings = Some(yaml.to_owned());
        self
    }

    pub fn build(self) -> TempDir {
        let dir = TempDir::new().unwrap();

        if let Some(yaml) = self.settings {
            std::fs::write(dir.path().join(SETTINGS_FILE_NAME), yaml).unwrap();
        }

        dir
    }
}

/// Opens the studio the way the command line does.
pub fn open_studio(working_dir: &Path) -> (Settings, Studio<FileStore>) {
    let settings = Settings::load(working_dir).unwrap();
    let store = FileStore::new(settings.data_path(working_dir));
    let studio = Studio::open(store, settings.generator_config());

    (settings, studio)
}
