#![deny(unsafe_code)]
//! Core color math for the hue-forge palette tool.
//!
//! Provides hex/RGB/HSL conversion (`Rgb`, `Hsl`), WCAG luminance and
//! contrast checks, the six palette strategies behind `PaletteGenerator`,
//! the seedable `Xorshift64` random source and the reproducible `Recipe`.

pub mod color;
pub mod contrast;
pub mod error;
pub mod generator;
pub mod prng;
pub mod recipe;

pub use color::{hex_to_rgb, hsl_to_rgb, random_color, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use contrast::{check_wcag, contrast_ratio, luminance, WcagResult};
pub use error::PaletteError;
pub use generator::{Mood, PaletteGenerator, Strategy, DEFAULT_COUNT};
pub use prng::{RandomSource, Xorshift64};
pub use recipe::Recipe;
