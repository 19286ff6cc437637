//! The working palette together with the saved-palette library, backed by a
//! [`KeyValueStore`].

use crate::ai::PaletteSource;
use crate::library::{PaletteLibrary, SavedPalette};
use crate::store::KeyValueStore;
use crate::{Error, Result, SESSION_KEY};
use chroma_generator::{GeneratorConfig, PaletteSession};

pub struct Studio<S: KeyValueStore> {
    store: S,
    session: PaletteSession,
    library: PaletteLibrary,
}

impl<S: KeyValueStore> Studio<S> {
    /// Restores the previous session from `store`, or starts an empty one
    /// configured with `defaults`.
    pub fn open(store: S, defaults: GeneratorConfig) -> Self {
        let session = match restore_session(&store) {
            Some(session) => session,
            None => PaletteSession::new(defaults),
        };
        let library = PaletteLibrary::load(&store);

        Studio {
            store,
            session,
            library,
        }
    }

    pub fn session(&self) -> &PaletteSession {
        &self.session
    }

    /// Mutable access to the session. Call [`Self::persist_session`] to keep
    /// changes made through it.
    pub fn session_mut(&mut self) -> &mut PaletteSession {
        &mut self.session
    }

    pub fn library(&self) -> &PaletteLibrary {
        &self.library
    }

    pub fn regenerate(&mut self) -> Result<()> {
        self.session.regenerate();
        self.persist_session()
    }

    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        let locked = self.session.toggle_lock(index)?;
        self.persist_session()?;

        Ok(locked)
    }

    /// Asks `source` for colors matching the session prompt and merges them
    /// into the palette. Locked colors are kept.
    pub async fn generate_with<P: PaletteSource + ?Sized>(&mut self, source: &P) -> Result<()> {
        let config = self.session.config().clone();
        let prompt = config.prompt.trim();

        if prompt.is_empty() {
            return Err(Error::EmptyPrompt);
        }

        let colors = source
            .generate(prompt, config.count, Some(&config.base_color))
            .await?;

        self.session.apply_generated(&colors)?;
        self.persist_session()
    }

    pub fn save_palette(&mut self, name: &str) -> Result<SavedPalette> {
        if self.session.is_empty() {
            return Err(Error::EmptyPalette);
        }

        let saved = self.library.save(name, self.session.hex_codes())?.clone();
        self.library.persist(&mut self.store)?;

        Ok(saved)
    }

    /// Replaces the working palette with a saved one. Every loaded color
    /// starts out locked.
    pub fn load_palette(&mut self, id: &str) -> Result<SavedPalette> {
        let saved = self.library.find(id)?.clone();

        self.session.load_palette(&saved.colors);
        self.persist_session()?;

        Ok(saved)
    }

    pub fn delete_palette(&mut self, id: &str) -> Result<SavedPalette> {
        let removed = self.library.delete(id)?;
        self.library.persist(&mut self.store)?;

        Ok(removed)
    }

    pub fn persist_session(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.session)?;
        self.store.set(SESSION_KEY, &json)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn restore_session(store: &dyn KeyValueStore) -> Option<PaletteSession> {
    let json = match store.get(SESSION_KEY) {
        Ok(json) => json?,
        Err(e) => {
            log::warn!("Failed to read the current palette, starting over: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<PaletteSession>(&json) {
        Ok(session) if session.is_well_formed() => Some(session),
        Ok(_) => {
            log::warn!("Stored palette contains invalid colors or counts, starting over");
            None
        }
        Err(e) => {
            log::warn!("Failed to parse the current palette, starting over: {}", e);
            None
        }
    }
}
