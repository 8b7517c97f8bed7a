#![deny(unsafe_code)]
//! Palette persistence for hue-forge.
//!
//! A [`PaletteStore`] keeps the current palette and a list of saved palettes
//! as JSON text in any [`KeyValueStore`]. [`PaletteState`] holds the current
//! palette in memory and notifies subscribers on change; persisting it is a
//! matter of subscribing a store with [`PaletteState::persist_to`].

pub mod backend;
pub mod error;
pub mod gateway;
pub mod state;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::StoreError;
pub use gateway::{
    PaletteData, PaletteStore, SavedPalette, CURRENT_PALETTE_KEY, SAVED_PALETTES_KEY,
};
pub use state::{PaletteState, SubscriptionId};
