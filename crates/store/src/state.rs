//! Observable current-palette state.
//!
//! [`PaletteState`] owns the palette on screen. Changes go through
//! [`PaletteState::set_palette`] or [`PaletteState::update`], and each one is
//! pushed to every subscriber in subscription order. Persistence is one such
//! subscriber, installed with [`PaletteState::persist_to`].

use crate::backend::KeyValueStore;
use crate::error::StoreError;
use crate::gateway::PaletteStore;
use std::fmt;
use tracing::{debug, warn};

/// Handle returned by [`PaletteState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[String]) + Send>;

/// The current palette plus its subscribers.
#[derive(Default)]
pub struct PaletteState {
    palette: Vec<String>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl fmt::Debug for PaletteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteState")
            .field("palette", &self.palette)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Vec<String>) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Starts from the stored current palette. An absent or empty stored
    /// palette gives an empty state.
    pub fn load<S: KeyValueStore>(store: &PaletteStore<S>) -> Result<Self, StoreError> {
        let palette = store.current_palette()?.unwrap_or_default();
        debug!(colors = palette.len(), "loaded current palette");
        Ok(Self::with_palette(palette))
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Replaces the palette and notifies subscribers.
    pub fn set_palette(&mut self, palette: Vec<String>) {
        self.palette = palette;
        self.notify();
    }

    /// Mutates the palette in place, then notifies subscribers.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<String>),
    {
        f(&mut self.palette);
        self.notify();
    }

    /// Registers `observer`; it runs after every change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&[String]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Subscribes a writer that saves every change as the stored current
    /// palette. Write failures are logged and otherwise ignored.
    pub fn persist_to<S>(&mut self, store: PaletteStore<S>) -> SubscriptionId
    where
        S: KeyValueStore + Send + Sync + 'static,
    {
        self.subscribe(move |palette| {
            if let Err(e) = store.save_current_palette(palette) {
                warn!(error = %e, "failed to persist current palette");
            }
        })
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.palette);
        }
    }
}
