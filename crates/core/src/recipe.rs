//! Reproducible description of a generated palette.
//!
//! A [`Recipe`] captures everything needed to recreate a palette: strategy,
//! seed color, mood, size and PRNG seed. Storing the recipe next to a saved
//! palette lets a front end regenerate or tweak it later.

use crate::color::Rgb;
use crate::error::PaletteError;
use crate::generator::{PaletteGenerator, Strategy, DEFAULT_COUNT};
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};

/// Everything needed to repeat one generator call.
///
/// Two identical recipes always produce identical palettes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub strategy: Strategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default = "default_count")]
    pub count: usize,
    pub seed: u64,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

impl Recipe {
    /// Creates a recipe with no base color or mood and the default count.
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            base: None,
            mood: None,
            count: DEFAULT_COUNT,
            seed,
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Strict check for callers that want to reject input the generators
    /// would otherwise quietly replace: a zero count or an unparseable base.
    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.count == 0 {
            return Err(PaletteError::InvalidRecipe(
                "count must be at least 1".to_string(),
            ));
        }
        if let Some(base) = &self.base {
            Rgb::from_hex(base)?;
        }
        Ok(())
    }

    /// Generates the palette this recipe describes.
    pub fn generate(&self) -> Vec<String> {
        PaletteGenerator::new(Xorshift64::new(self.seed)).generate(
            self.strategy,
            self.base.as_deref(),
            self.mood.as_deref(),
            self.count,
        )
    }
}
