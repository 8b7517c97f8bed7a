//! The palette gateway: current palette and saved palettes over a key-value store.
//!
//! Values are JSON text under two keys:
//! - `currentPalette`: an array of hex strings
//! - `colorPalettes`: an array of saved entries, each the palette data plus
//!   `id` (milliseconds since the Unix epoch, as a string) and `createdAt`
//!   (RFC 3339, millisecond precision, UTC)

use crate::backend::KeyValueStore;
use crate::error::StoreError;
use chrono::{DateTime, SubsecRound, Utc};
use hue_forge_core::Recipe;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Key holding the current palette.
pub const CURRENT_PALETTE_KEY: &str = "currentPalette";
/// Key holding the saved palette list.
pub const SAVED_PALETTES_KEY: &str = "colorPalettes";

/// What a caller hands to [`PaletteStore::save_palette`].
///
/// Fields the gateway does not know about are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaletteData {
    pub fn new(colors: Vec<String>) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = Some(recipe);
        self
    }
}

/// A palette in the saved list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: PaletteData,
}

/// Gateway for the current palette and the saved palette list.
///
/// Cheap to clone: clones share the same backend.
#[derive(Debug)]
pub struct PaletteStore<S> {
    backend: Arc<S>,
}

impl<S> Clone for PaletteStore<S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<S: KeyValueStore> PaletteStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Wraps a backend that is already shared elsewhere.
    pub fn from_shared(backend: Arc<S>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.backend.set(key, &text)
    }

    /// Replaces the stored current palette.
    pub fn save_current_palette(&self, colors: &[String]) -> Result<(), StoreError> {
        self.write_json(CURRENT_PALETTE_KEY, colors)
    }

    /// The stored current palette, or `None` if none was ever saved.
    pub fn current_palette(&self) -> Result<Option<Vec<String>>, StoreError> {
        self.read_json(CURRENT_PALETTE_KEY)
    }

    /// All saved palettes in insertion order. Empty if none were saved.
    pub fn saved_palettes(&self) -> Result<Vec<SavedPalette>, StoreError> {
        Ok(self.read_json(SAVED_PALETTES_KEY)?.unwrap_or_default())
    }

    fn write_saved(&self, palettes: &[SavedPalette]) -> Result<(), StoreError> {
        self.write_json(SAVED_PALETTES_KEY, palettes)
    }

    /// Appends `data` to the saved list, stamped with the current time.
    pub fn save_palette(&self, data: PaletteData) -> Result<SavedPalette, StoreError> {
        self.save_palette_at(data, Utc::now())
    }

    /// Appends `data` to the saved list, stamped with `now`. Any `id` or
    /// `createdAt` in `data.extra` is discarded.
    ///
    /// The id is `now` in epoch milliseconds. If that id is already taken it
    /// is bumped until unique, so two saves within one millisecond still get
    /// distinct ids.
    pub fn save_palette_at(
        &self,
        mut data: PaletteData,
        now: DateTime<Utc>,
    ) -> Result<SavedPalette, StoreError> {
        // The generated id and timestamp win over caller-supplied ones.
        data.extra.remove("id");
        data.extra.remove("createdAt");
        let mut palettes = self.saved_palettes()?;
        let mut millis = now.timestamp_millis();
        while palettes.iter().any(|p| p.id == millis.to_string()) {
            millis += 1;
        }
        let entry = SavedPalette {
            id: millis.to_string(),
            created_at: now.trunc_subsecs(3),
            data,
        };
        palettes.push(entry.clone());
        self.write_saved(&palettes)?;
        debug!(id = %entry.id, colors = entry.data.colors.len(), "saved palette");
        Ok(entry)
    }

    /// Removes the palette with `id` and returns the remaining list.
    ///
    /// An unknown id leaves the list unchanged.
    pub fn delete_palette(&self, id: &str) -> Result<Vec<SavedPalette>, StoreError> {
        let mut palettes = self.saved_palettes()?;
        let before = palettes.len();
        palettes.retain(|p| p.id != id);
        debug!(id, removed = before - palettes.len(), "deleted palette");
        self.write_saved(&palettes)?;
        Ok(palettes)
    }

    /// Shallow-merges `updates` into the palette with `id`: every key in
    /// `updates` replaces the entry's field of the same name.
    ///
    /// Returns the updated entry, or `None` (without writing) if no palette
    /// has that id. An update that leaves the entry malformed, such as
    /// `colors` set to a number, is rejected with
    /// [`StoreError::Serialization`] and nothing is written.
    pub fn update_palette(
        &self,
        id: &str,
        updates: Map<String, Value>,
    ) -> Result<Option<SavedPalette>, StoreError> {
        let mut palettes = self.saved_palettes()?;
        let Some(index) = palettes.iter().position(|p| p.id == id) else {
            debug!(id, "update for unknown palette id");
            return Ok(None);
        };

        let mut merged = match serde_json::to_value(&palettes[index])? {
            Value::Object(map) => map,
            // SavedPalette always serializes to an object.
            _ => Map::new(),
        };
        merged.extend(updates);
        let updated: SavedPalette = serde_json::from_value(Value::Object(merged))?;

        palettes[index] = updated.clone();
        self.write_saved(&palettes)?;
        Ok(Some(updated))
    }

    /// Sets the name of the palette with `id`.
    pub fn rename_palette(
        &self,
        id: &str,
        name: &str,
    ) -> Result<Option<SavedPalette>, StoreError> {
        let mut updates = Map::new();
        updates.insert("name".to_string(), Value::String(name.to_string()));
        self.update_palette(id, updates)
    }
}
