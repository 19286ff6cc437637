use crate::store::KeyValueStore;
use crate::{Error, Result, SAVED_PALETTES_KEY};
use chroma_generator::{is_valid_hex, MAX_COLORS, MIN_COLORS};
use std::time::{SystemTime, UNIX_EPOCH};

/// Ids shorter than this can't be used to look up a palette by prefix.
const MIN_ID_PREFIX: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: String,
    pub name: String,
    pub colors: Vec<String>,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: u64,
}

/// Named palettes, most recently saved first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteLibrary {
    palettes: Vec<SavedPalette>,
}

impl PaletteLibrary {
    /// Reads the library from `store`. A missing, unreadable or corrupt entry
    /// yields an empty library.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(SAVED_PALETTES_KEY) {
            Ok(Some(json)) => Self::from_json(&json),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to read saved palettes, starting empty: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Self {
        let palettes: Vec<SavedPalette> = match serde_json::from_str(json) {
            Ok(palettes) => palettes,
            Err(e) => {
                log::warn!("Failed to parse saved palettes, starting empty: {}", e);
                return Self::default();
            }
        };

        let (palettes, broken): (Vec<_>, Vec<_>) = palettes.into_iter().partition(|p| {
            (MIN_COLORS..=MAX_COLORS).contains(&p.colors.len())
                && p.colors.iter().all(|c| is_valid_hex(c))
        });

        for palette in broken {
            log::warn!(
                "Skipping saved palette `{}` with {} invalid or out of range colors",
                palette.name,
                palette.colors.len()
            );
        }

        PaletteLibrary { palettes }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.palettes)?)
    }

    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(SAVED_PALETTES_KEY, &self.to_json()?)
    }

    pub fn list(&self) -> &[SavedPalette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Default name offered when saving, e.g. `Palette 3`.
    pub fn suggested_name(&self) -> String {
        format!("Palette {}", self.palettes.len() + 1)
    }

    pub fn get(&self, id: &str) -> Option<&SavedPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Looks a palette up by full id, or by an unambiguous id prefix.
    pub fn find(&self, query: &str) -> Result<&SavedPalette> {
        if let Some(palette) = self.get(query) {
            return Ok(palette);
        }

        let mut matches = self.palettes.iter().filter(|p| p.id.starts_with(query));

        match (matches.next(), matches.next()) {
            (Some(palette), None) if query.len() >= MIN_ID_PREFIX => Ok(palette),
            _ => Err(Error::PaletteNotFound(query.to_owned())),
        }
    }

    pub fn save(&mut self, name: &str, colors: Vec<String>) -> Result<&SavedPalette> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }

        let palette = SavedPalette {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            colors,
            timestamp: now_millis(),
        };

        log::info!("Saved palette `{}` ({})", palette.name, palette.id);

        self.palettes.insert(0, palette);
        Ok(&self.palettes[0])
    }

    pub fn delete(&mut self, query: &str) -> Result<SavedPalette> {
        let id = self.find(query)?.id.clone();
        let index = self
            .palettes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::PaletteNotFound(query.to_owned()))?;

        Ok(self.palettes.remove(index))
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
