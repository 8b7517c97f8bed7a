//! Error types for the hue-forge core.

use thiserror::Error;

/// Errors produced by core color operations.
///
/// The generators never return these: an unparseable seed color degrades to
/// an unseeded palette instead. They surface from the `Result`-returning
/// constructors (`Rgb::from_hex`, `Strategy::from_name`, `Recipe::validate`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A strategy name was not recognized.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// A recipe could not be turned into a palette.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_message() {
        let err = PaletteError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_strategy_includes_name() {
        let err = PaletteError::UnknownStrategy("tetrad".into());
        let msg = format!("{err}");
        assert!(msg.contains("tetrad"), "missing name in: {msg}");
    }

    #[test]
    fn invalid_recipe_includes_message() {
        let err = PaletteError::InvalidRecipe("count must be at least 1".into());
        let msg = format!("{err}");
        assert!(msg.contains("count"), "missing message in: {msg}");
    }

    #[test]
    fn palette_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaletteError>();
    }

    #[test]
    fn palette_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PaletteError>();
    }
}
