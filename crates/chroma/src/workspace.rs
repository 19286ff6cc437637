use crate::Result;
use libchroma::{FileStore, Settings, Studio};
use std::path::Path;

/// Settings and palette state of one working directory.
pub(crate) struct Workspace {
    pub settings: Settings,
    pub studio: Studio<FileStore>,
}

pub(crate) fn open(working_dir: &Path) -> Result<Workspace> {
    let settings = Settings::load(working_dir)?;
    let store = FileStore::new(settings.data_path(working_dir));

    log::debug!("Using palette data in {}", store.root().display());

    let studio = Studio::open(store, settings.generator_config());

    Ok(Workspace { settings, studio })
}
