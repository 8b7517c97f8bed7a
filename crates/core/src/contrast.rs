//! Relative luminance, contrast ratio and WCAG 2 pass/fail classification.
//!
//! See <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance> and
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>.

use crate::color::hex_to_rgb;
use serde::{Deserialize, Serialize};

/// Minimum ratio for normal text at level AA.
pub const AA_THRESHOLD: f64 = 4.5;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE_THRESHOLD: f64 = 3.0;
/// Minimum ratio for normal text at level AAA.
pub const AAA_THRESHOLD: f64 = 7.0;
/// Minimum ratio for large text at level AAA. Same value as [`AA_THRESHOLD`].
pub const AAA_LARGE_THRESHOLD: f64 = 4.5;

/// Result of checking a foreground/background pair against WCAG levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WcagResult {
    /// Contrast ratio rounded to two decimals.
    pub ratio: f64,
    #[serde(rename = "AA")]
    pub aa: bool,
    #[serde(rename = "AALarge")]
    pub aa_large: bool,
    #[serde(rename = "AAA")]
    pub aaa: bool,
    #[serde(rename = "AAALarge")]
    pub aaa_large: bool,
}

/// Linearizes one sRGB channel in [0, 1].
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a hex color in [0, 1]. Unparseable input yields 0.
pub fn luminance(hex: &str) -> f64 {
    let Some(rgb) = hex_to_rgb(hex) else {
        return 0.0;
    };
    let r = linearize(rgb.r as f64 / 255.0);
    let g = linearize(rgb.g as f64 / 255.0);
    let b = linearize(rgb.b as f64 / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two hex colors, from 1.0 (identical) to 21.0.
///
/// Symmetric in its arguments.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Classifies a color pair against the WCAG AA / AAA text thresholds.
///
/// Flags are decided on the unrounded ratio; only the reported `ratio` is
/// rounded.
pub fn check_wcag(a: &str, b: &str) -> WcagResult {
    let ratio = contrast_ratio(a, b);
    WcagResult {
        ratio: (ratio * 100.0).round() / 100.0,
        aa: ratio >= AA_THRESHOLD,
        aa_large: ratio >= AA_LARGE_THRESHOLD,
        aaa: ratio >= AAA_THRESHOLD,
        aaa_large: ratio >= AAA_LARGE_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn luminance_of_black_and_white() {
        assert!(luminance("#000000").abs() < EPSILON);
        assert!((luminance("#ffffff") - 1.0).abs() < EPSILON);
    }

    #[test]
    fn luminance_weights_channels() {
        assert!((luminance("#ff0000") - 0.2126).abs() < EPSILON);
        assert!((luminance("#00ff00") - 0.7152).abs() < EPSILON);
        assert!((luminance("#0000ff") - 0.0722).abs() < EPSILON);
    }

    #[test]
    fn luminance_of_unparseable_color_is_zero() {
        assert_eq!(luminance("not-a-color"), 0.0);
        assert_eq!(luminance("#fff"), 0.0);
    }

    #[test]
    fn linearize_switches_segment_at_0_03928() {
        assert!((linearize(0.03928) - 0.03928 / 12.92).abs() < EPSILON);
        let above = ((0.0393 + 0.055) / 1.055_f64).powf(2.4);
        assert!((linearize(0.0393) - above).abs() < EPSILON);
    }

    #[test]
    fn black_on_white_passes_everything() {
        let result = check_wcag("#000000", "#ffffff");
        assert_eq!(result.ratio, 21.0);
        assert!(result.aa && result.aa_large && result.aaa && result.aaa_large);
    }

    #[test]
    fn identical_colors_have_ratio_one() {
        assert!((contrast_ratio("#3366cc", "#3366cc") - 1.0).abs() < EPSILON);
        let result = check_wcag("#777777", "#777777");
        assert_eq!(result.ratio, 1.0);
        assert!(!result.aa && !result.aa_large && !result.aaa && !result.aaa_large);
    }

    #[test]
    fn mid_gray_on_white_is_large_text_only() {
        // #777777 on white is ~4.48: below 4.5, above 3.
        let result = check_wcag("#777777", "#ffffff");
        assert_eq!(result.ratio, 4.48);
        assert!(!result.aa);
        assert!(result.aa_large);
        assert!(!result.aaa);
        assert!(!result.aaa_large);
    }

    #[test]
    fn aa_and_aaa_large_share_a_threshold() {
        // Kept on purpose: AAA for large text is reported at the AA normal-text
        // threshold of 4.5 rather than WCAG's 4.5/7 split.
        assert_eq!(AA_THRESHOLD, AAA_LARGE_THRESHOLD);
        for (fg, bg) in [("#767676", "#ffffff"), ("#595959", "#ffffff"), ("#3366cc", "#000000")] {
            let result = check_wcag(fg, bg);
            assert_eq!(result.aa, result.aaa_large, "{fg} on {bg}");
        }
    }

    #[test]
    fn flags_use_unrounded_ratio() {
        // #767676 on white is ~4.54: rounded and unrounded agree on AA.
        let result = check_wcag("#767676", "#ffffff");
        assert_eq!(result.ratio, 4.54);
        assert!(result.aa);
        assert!(!result.aaa);
    }

    #[test]
    fn wcag_result_serializes_with_level_names() {
        let json = serde_json::to_value(check_wcag("#000000", "#ffffff")).unwrap();
        assert_eq!(json["ratio"], 21.0);
        assert_eq!(json["AA"], true);
        assert_eq!(json["AALarge"], true);
        assert_eq!(json["AAA"], true);
        assert_eq!(json["AAALarge"], true);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn contrast_is_symmetric(a in "#[0-9a-f]{6}", b in "#[0-9a-f]{6}") {
                prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
            }

            #[test]
            fn contrast_with_self_is_one(c in "#[0-9a-f]{6}") {
                prop_assert!((contrast_ratio(&c, &c) - 1.0).abs() < EPSILON);
            }

            #[test]
            fn contrast_is_between_one_and_twenty_one(a in "#[0-9a-f]{6}", b in "#[0-9a-f]{6}") {
                let ratio = contrast_ratio(&a, &b);
                prop_assert!((1.0..=21.0 + EPSILON).contains(&ratio), "ratio {}", ratio);
            }

            #[test]
            fn luminance_in_unit_interval(c in "#[0-9a-fA-F]{6}") {
                let l = luminance(&c);
                prop_assert!((0.0..=1.0 + EPSILON).contains(&l), "luminance {}", l);
            }
        }
    }
}
