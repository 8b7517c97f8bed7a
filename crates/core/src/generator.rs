//! Palette generators.
//!
//! Every strategy follows the same recipe: choose a sequence of hues, pick a
//! saturation near a base value with bounded random jitter, spread lightness
//! evenly across a fixed range (again with a little jitter), then convert each
//! HSL triple back to hex.
//!
//! Randomness comes from the [`RandomSource`] owned by the [`PaletteGenerator`].
//! Per entry the saturation is drawn before the lightness, so a seeded source
//! always reproduces the same palette.
//!
//! Generators never fail. When a seed color cannot be parsed they fall back to
//! an unseeded harmonious palette with the same count.

use crate::color::{hex_to_rgb, hsl_to_rgb, rgb_to_hsl, Hsl};
use crate::error::PaletteError;
use crate::prng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Palette size used when the caller does not ask for one.
pub const DEFAULT_COUNT: usize = 5;

/// Lightness range most strategies spread their entries across.
const LIGHTNESS_RANGE: (f64, f64) = (25.0, 75.0);
/// Wider lightness range used by the monochrome strategy.
const MONOCHROME_LIGHTNESS_RANGE: (f64, f64) = (20.0, 80.0);
/// Bounds applied after lightness jitter.
const LIGHTNESS_CLAMP: (f64, f64) = (20.0, 85.0);
/// Full width of the lightness jitter (+/- half of this).
const LIGHTNESS_JITTER: f64 = 10.0;

/// The six generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Harmonious,
    Analogous,
    Monochrome,
    Triad,
    Complementary,
    Mood,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Harmonious,
        Strategy::Analogous,
        Strategy::Monochrome,
        Strategy::Triad,
        Strategy::Complementary,
        Strategy::Mood,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Harmonious => "harmonious",
            Strategy::Analogous => "analogous",
            Strategy::Monochrome => "monochrome",
            Strategy::Triad => "triad",
            Strategy::Complementary => "complementary",
            Strategy::Mood => "mood",
        }
    }

    /// Looks up a strategy by name (case insensitive).
    pub fn from_name(name: &str) -> Result<Self, PaletteError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| PaletteError::UnknownStrategy(name.to_string()))
    }

    /// Names of every strategy, in declaration order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    /// Whether the strategy derives its hues from a seed color.
    pub fn needs_base_color(self) -> bool {
        !matches!(self, Strategy::Harmonious | Strategy::Mood)
    }
}

/// Named moods for [`PaletteGenerator::mood`], each with a fixed HSL seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Energetic,
    Professional,
    Warm,
    Cool,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Calm,
        Mood::Energetic,
        Mood::Professional,
        Mood::Warm,
        Mood::Cool,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Professional => "professional",
            Mood::Warm => "warm",
            Mood::Cool => "cool",
        }
    }

    /// Looks up a mood by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Names of every mood, in declaration order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.name()).collect()
    }

    /// The HSL seed of this mood. Only hue and saturation drive generation.
    pub fn seed(self) -> Hsl {
        let (h, s, l) = match self {
            Mood::Calm => (200.0, 30.0, 50.0),
            Mood::Energetic => (10.0, 80.0, 50.0),
            Mood::Professional => (220.0, 40.0, 40.0),
            Mood::Warm => (30.0, 60.0, 55.0),
            Mood::Cool => (200.0, 50.0, 50.0),
        };
        Hsl { h, s, l }
    }
}

/// Distance between consecutive lightness values when `n` entries span `range`.
///
/// A single entry only ever uses index 0, so its step is irrelevant.
fn lightness_step(range: (f64, f64), n: usize) -> f64 {
    let span = range.1 - range.0;
    if n <= 1 {
        span
    } else {
        span / (n - 1) as f64
    }
}

fn hsl_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(Hsl { h, s, l }).to_hex()
}

/// Generates palettes from an injected random source.
#[derive(Debug, Clone)]
pub struct PaletteGenerator<R> {
    rng: R,
}

impl<R: RandomSource> PaletteGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Gives the random source back, e.g. to keep drawing from the same stream.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Uniform offset in [-width/2, width/2).
    fn jitter(&mut self, width: f64) -> f64 {
        (self.rng.next_f64() - 0.5) * width
    }

    /// Jittered saturation around `base`, clamped to `[min, max]`.
    fn saturation_near(&mut self, base: f64, width: f64, min: f64, max: f64) -> f64 {
        (base + self.jitter(width)).clamp(min, max)
    }

    /// Jittered lightness around `base`, clamped to the shared lightness bounds.
    fn lightness_near(&mut self, base: f64) -> f64 {
        (base + self.jitter(LIGHTNESS_JITTER)).clamp(LIGHTNESS_CLAMP.0, LIGHTNESS_CLAMP.1)
    }

    /// Parses a seed color into whole-number HSL, logging parse failures.
    fn seed_hsl(strategy: Strategy, base: &str) -> Option<Hsl> {
        let rgb = hex_to_rgb(base);
        if rgb.is_none() {
            debug!(
                strategy = strategy.name(),
                base, "unparseable base color, falling back to unseeded harmonious palette"
            );
        }
        rgb.map(rgb_to_hsl)
    }

    /// Runs `strategy`. Strategies that need a seed color fall back to an
    /// unseeded harmonious palette when `base` is missing or unparseable; the
    /// mood strategy uses calm when `mood` is missing or unknown.
    pub fn generate(
        &mut self,
        strategy: Strategy,
        base: Option<&str>,
        mood: Option<&str>,
        count: usize,
    ) -> Vec<String> {
        match (strategy, base) {
            (Strategy::Harmonious, base) => self.harmonious(count, base),
            (Strategy::Mood, _) => self.mood(mood.unwrap_or(Mood::Calm.name()), count),
            (_, None) => {
                debug!(
                    strategy = strategy.name(),
                    "no base color given, falling back to unseeded harmonious palette"
                );
                self.harmonious(count, None)
            }
            (Strategy::Analogous, Some(base)) => self.analogous(base, count),
            (Strategy::Monochrome, Some(base)) => self.monochrome(base, count),
            (Strategy::Triad, Some(base)) => self.triad(base, count),
            (Strategy::Complementary, Some(base)) => self.complementary(base, count),
        }
    }

    /// Hues stepped around the wheel with lightness spread over [25, 75].
    ///
    /// Seeded from `base`, hues step by 30 degrees and saturation stays within
    /// 10 of the seed (clamped to [50, 90]). Without a usable seed the base hue
    /// is random, hues step by 72 degrees and saturation is drawn from [50, 90).
    pub fn harmonious(&mut self, count: usize, base: Option<&str>) -> Vec<String> {
        let count = count.max(1);
        let step = lightness_step(LIGHTNESS_RANGE, count);

        if let Some(base) = base {
            let Some(seed) = Self::seed_hsl(Strategy::Harmonious, base) else {
                return self.harmonious(count, None);
            };
            return (0..count)
                .map(|i| {
                    let h = (seed.h + i as f64 * 30.0) % 360.0;
                    let s = self.saturation_near(seed.s, 20.0, 50.0, 90.0);
                    let l = self.lightness_near(LIGHTNESS_RANGE.0 + step * i as f64);
                    hsl_hex(h, s, l)
                })
                .collect();
        }

        let base_hue = (self.rng.next_f64() * 360.0).floor();
        (0..count)
            .map(|i| {
                let h = (base_hue + i as f64 * 72.0) % 360.0;
                let s = 50.0 + self.rng.next_f64() * 40.0;
                let l = self.lightness_near(LIGHTNESS_RANGE.0 + step * i as f64);
                hsl_hex(h, s, l)
            })
            .collect()
    }

    /// Hues fanned out in 30 degree steps centered on the seed hue.
    pub fn analogous(&mut self, base: &str, count: usize) -> Vec<String> {
        let count = count.max(1);
        let Some(seed) = Self::seed_hsl(Strategy::Analogous, base) else {
            return self.harmonious(count, None);
        };
        let step = lightness_step(LIGHTNESS_RANGE, count);
        let center = (count / 2) as f64;

        (0..count)
            .map(|i| {
                let h = (seed.h + (i as f64 - center) * 30.0).rem_euclid(360.0);
                let s = self.saturation_near(seed.s, 15.0, 50.0, 90.0);
                let l = self.lightness_near(LIGHTNESS_RANGE.0 + step * i as f64);
                hsl_hex(h, s, l)
            })
            .collect()
    }

    /// The seed hue at evenly spread lightness over [20, 80], no jitter.
    ///
    /// Saturation is the seed's plus 10 above 50% lightness, minus 5 at or
    /// below, clamped to [40, 90]. Draws nothing from the random source.
    pub fn monochrome(&mut self, base: &str, count: usize) -> Vec<String> {
        let count = count.max(1);
        let Some(seed) = Self::seed_hsl(Strategy::Monochrome, base) else {
            return self.harmonious(count, None);
        };
        let step = lightness_step(MONOCHROME_LIGHTNESS_RANGE, count);

        (0..count)
            .map(|i| {
                let l = MONOCHROME_LIGHTNESS_RANGE.0 + step * i as f64;
                let bias = if l > 50.0 { 10.0 } else { -5.0 };
                let s = (seed.s + bias).clamp(40.0, 90.0);
                hsl_hex(seed.h, s, l)
            })
            .collect()
    }

    /// The seed color verbatim, then entries cycling through the three hues
    /// 120 degrees apart.
    pub fn triad(&mut self, base: &str, count: usize) -> Vec<String> {
        let count = count.max(1);
        let Some(seed) = Self::seed_hsl(Strategy::Triad, base) else {
            return self.harmonious(count, None);
        };
        let hues = [
            seed.h,
            (seed.h + 120.0) % 360.0,
            (seed.h + 240.0) % 360.0,
        ];
        self.seeded_tail(base, seed, count, |i| hues[i % 3])
    }

    /// The seed color verbatim, then entries alternating between the seed hue
    /// (odd positions) and its complement (even positions).
    pub fn complementary(&mut self, base: &str, count: usize) -> Vec<String> {
        let count = count.max(1);
        let Some(seed) = Self::seed_hsl(Strategy::Complementary, base) else {
            return self.harmonious(count, None);
        };
        let complement = (seed.h + 180.0) % 360.0;
        self.seeded_tail(base, seed, count, |i| {
            if i % 2 == 0 {
                complement
            } else {
                seed.h
            }
        })
    }

    /// Shared body of triad and complementary: `base` as given, then
    /// `count - 1` entries with lightness spread from 25 in steps of
    /// 50 / (count - 1).
    fn seeded_tail(
        &mut self,
        base: &str,
        seed: Hsl,
        count: usize,
        hue_at: impl Fn(usize) -> f64,
    ) -> Vec<String> {
        let remaining = count - 1;
        let step = if remaining > 0 {
            (LIGHTNESS_RANGE.1 - LIGHTNESS_RANGE.0) / remaining as f64
        } else {
            0.0
        };

        let mut colors = Vec::with_capacity(count);
        colors.push(base.to_string());
        for i in 1..count {
            let s = self.saturation_near(seed.s, 20.0, 50.0, 90.0);
            let l = self.lightness_near(LIGHTNESS_RANGE.0 + step * (i - 1) as f64);
            colors.push(hsl_hex(hue_at(i), s, l));
        }
        colors
    }

    /// Hues stepping by 20 degrees from a named mood's seed. Unknown mood
    /// names use calm.
    pub fn mood(&mut self, mood: &str, count: usize) -> Vec<String> {
        let count = count.max(1);
        let seed = Mood::from_name(mood)
            .unwrap_or_else(|| {
                debug!(mood, "unknown mood, using calm");
                Mood::Calm
            })
            .seed();
        let step = lightness_step(LIGHTNESS_RANGE, count);

        (0..count)
            .map(|i| {
                let h = (seed.h + i as f64 * 20.0) % 360.0;
                let s = self.saturation_near(seed.s, 20.0, 30.0, 85.0);
                let l = self.lightness_near(LIGHTNESS_RANGE.0 + step * i as f64);
                hsl_hex(h, s, l)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsl;
    use crate::prng::Xorshift64;

    /// Source that always returns the same value; 0.5 means zero jitter.
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    /// Source that counts how many values were drawn.
    struct Counting(usize);

    impl RandomSource for Counting {
        fn next_f64(&mut self) -> f64 {
            self.0 += 1;
            0.5
        }
    }

    fn centered() -> PaletteGenerator<Fixed> {
        PaletteGenerator::new(Fixed(0.5))
    }

    fn seeded(seed: u64) -> PaletteGenerator<Xorshift64> {
        PaletteGenerator::new(Xorshift64::new(seed))
    }

    fn is_canonical_hex(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..]
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    // -- Names --

    #[test]
    fn strategy_from_name_round_trips_every_strategy() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.name()).unwrap(), strategy);
        }
        assert_eq!(Strategy::from_name("TRIAD").unwrap(), Strategy::Triad);
        assert!(Strategy::from_name("tetrad").is_err());
    }

    #[test]
    fn list_names_cover_all_variants() {
        assert_eq!(Strategy::list_names().len(), 6);
        assert_eq!(
            Mood::list_names(),
            vec!["calm", "energetic", "professional", "warm", "cool"]
        );
    }

    #[test]
    fn only_harmonious_and_mood_work_without_a_base_color() {
        let unseeded: Vec<_> = Strategy::ALL
            .into_iter()
            .filter(|s| !s.needs_base_color())
            .collect();
        assert_eq!(unseeded, vec![Strategy::Harmonious, Strategy::Mood]);
    }

    #[test]
    fn mood_seeds_match_table() {
        let seeds: Vec<_> = Mood::ALL
            .iter()
            .map(|m| m.seed())
            .map(|s| (s.h, s.s, s.l))
            .collect();
        assert_eq!(
            seeds,
            vec![
                (200.0, 30.0, 50.0),
                (10.0, 80.0, 50.0),
                (220.0, 40.0, 40.0),
                (30.0, 60.0, 55.0),
                (200.0, 50.0, 50.0),
            ]
        );
    }

    // -- Exact outputs with zero jitter --

    #[test]
    fn harmonious_unseeded_with_centered_source() {
        // Base hue floor(0.5 * 360) = 180, hues step by 72.
        assert_eq!(
            centered().harmonious(5, None),
            vec!["#136c6c", "#371da3", "#d92691", "#e2ad5c", "#a4ec93"]
        );
    }

    #[test]
    fn harmonious_seeded_steps_by_30_degrees() {
        assert_eq!(
            centered().harmonious(5, Some("#3366cc")),
            vec!["#193366", "#392699", "#9933cc", "#d966c6", "#e699b2"]
        );
    }

    #[test]
    fn analogous_is_centered_on_base_hue() {
        let palette = centered().analogous("#3366cc", 5);
        assert_eq!(
            palette,
            vec!["#19664d", "#268699", "#3366cc", "#7966d9", "#cc99e6"]
        );
        // The middle entry sits on the seed hue at lightness 50.
        assert_eq!(palette[2], "#3366cc");
    }

    #[test]
    fn monochrome_known_values() {
        assert_eq!(
            centered().monochrome("#3366cc", 4),
            vec!["#172a4f", "#2e539e", "#5281e0", "#a8c0f0"]
        );
    }

    #[test]
    fn monochrome_keeps_hue_and_raises_lightness() {
        let palette = centered().monochrome("#3366cc", 4);
        let hsl: Vec<_> = palette
            .iter()
            .map(|c| rgb_to_hsl(hex_to_rgb(c).unwrap()))
            .collect();
        for w in hsl.windows(2) {
            assert!(w[0].l < w[1].l, "lightness not increasing: {palette:?}");
        }
        for c in &hsl {
            assert!((c.h - 220.0).abs() <= 1.0, "hue drifted: {palette:?}");
        }
    }

    #[test]
    fn monochrome_draws_no_randomness() {
        let mut generator = PaletteGenerator::new(Counting(0));
        generator.monochrome("#3366cc", 8);
        assert_eq!(generator.into_inner().0, 0);
    }

    #[test]
    fn triad_echoes_seed_then_cycles_hues() {
        assert_eq!(
            centered().triad("#ff0000", 3),
            vec!["#ff0000", "#067906", "#0d0df2"]
        );
    }

    #[test]
    fn complementary_alternates_base_and_complement() {
        assert_eq!(
            centered().complementary("#ff0000", 4),
            vec!["#ff0000", "#790606", "#0bcaca", "#f43535"]
        );
    }

    #[test]
    fn seeded_strategies_echo_input_verbatim() {
        assert_eq!(centered().triad("FF0000", 3)[0], "FF0000");
        assert_eq!(centered().complementary("#AbCdEf", 2)[0], "#AbCdEf");
    }

    #[test]
    fn mood_calm_known_values() {
        assert_eq!(
            centered().mood("calm", 5),
            vec!["#2d4653", "#43567c", "#5959a6", "#9683bc", "#c6acd2"]
        );
        assert_eq!(
            centered().mood("warm", 3),
            vec!["#664019", "#ccb333", "#d9e699"]
        );
    }

    #[test]
    fn low_draws_hit_the_clamps() {
        let mut generator = PaletteGenerator::new(Fixed(0.0));
        assert_eq!(
            generator.harmonious(3, None),
            vec!["#4d1919", "#95ac39", "#8cd9ab"]
        );
        assert_eq!(generator.mood("energetic", 2), vec!["#571b0f", "#e8b37d"]);
    }

    // -- Single-entry and empty palettes --

    #[test]
    fn single_entry_palettes() {
        assert_eq!(centered().harmonious(1, None), vec!["#136c6c"]);
        assert_eq!(centered().harmonious(1, Some("#3366cc")), vec!["#193366"]);
        assert_eq!(centered().monochrome("#3366cc", 1), vec!["#172a4f"]);
        assert_eq!(centered().triad("#3366cc", 1), vec!["#3366cc"]);
        assert_eq!(
            centered().complementary("#3366cc", 2),
            vec!["#3366cc", "#193366"]
        );
    }

    #[test]
    fn zero_count_is_treated_as_one() {
        let mut generator = seeded(3);
        assert_eq!(generator.harmonious(0, None).len(), 1);
        assert_eq!(generator.analogous("#3366cc", 0).len(), 1);
        assert_eq!(generator.monochrome("#3366cc", 0).len(), 1);
        assert_eq!(generator.triad("#3366cc", 0), vec!["#3366cc"]);
        assert_eq!(generator.complementary("#3366cc", 0), vec!["#3366cc"]);
        assert_eq!(generator.mood("cool", 0).len(), 1);
    }

    // -- Fallbacks --

    #[test]
    fn unparseable_base_falls_back_to_unseeded_harmonious() {
        let expected = seeded(11).harmonious(5, None);
        assert_eq!(seeded(11).analogous("not-a-color", 5), expected);
        assert_eq!(seeded(11).monochrome("#fff", 5), expected);
        assert_eq!(seeded(11).triad("", 5), expected);
        assert_eq!(seeded(11).complementary("#gggggg", 5), expected);
        assert_eq!(seeded(11).harmonious(5, Some("xyz123")), expected);
    }

    #[test]
    fn unknown_mood_uses_calm() {
        assert_eq!(
            seeded(5).mood("unknown-mood", 5),
            seeded(5).mood("calm", 5)
        );
    }

    #[test]
    fn mood_names_are_case_sensitive() {
        assert_eq!(seeded(5).mood("WARM", 4), seeded(5).mood("calm", 4));
        assert_ne!(seeded(5).mood("warm", 4), seeded(5).mood("calm", 4));
    }

    #[test]
    fn generate_dispatches_by_strategy() {
        assert_eq!(
            seeded(8).generate(Strategy::Triad, Some("#ff0000"), None, 4),
            seeded(8).triad("#ff0000", 4)
        );
        assert_eq!(
            seeded(8).generate(Strategy::Mood, None, Some("warm"), 4),
            seeded(8).mood("warm", 4)
        );
        assert_eq!(
            seeded(8).generate(Strategy::Mood, None, None, 4),
            seeded(8).mood("calm", 4)
        );
        assert_eq!(
            seeded(8).generate(Strategy::Harmonious, Some("#3366cc"), None, 4),
            seeded(8).harmonious(4, Some("#3366cc"))
        );
    }

    #[test]
    fn generate_without_base_falls_back_to_unseeded_harmonious() {
        for strategy in Strategy::ALL.into_iter().filter(|s| s.needs_base_color()) {
            assert_eq!(
                seeded(21).generate(strategy, None, None, 6),
                seeded(21).harmonious(6, None),
                "{}",
                strategy.name()
            );
        }
    }

    #[test]
    fn same_seed_same_palette() {
        assert_eq!(
            seeded(1234).harmonious(DEFAULT_COUNT, None),
            seeded(1234).harmonious(DEFAULT_COUNT, None)
        );
        assert_ne!(
            seeded(1234).harmonious(DEFAULT_COUNT, None),
            seeded(4321).harmonious(DEFAULT_COUNT, None)
        );
    }

    #[test]
    fn requested_lengths_and_canonical_hex() {
        let harmonious = seeded(77).harmonious(5, None);
        let monochrome = seeded(77).monochrome("#3366cc", 4);
        assert_eq!(harmonious.len(), 5);
        assert_eq!(monochrome.len(), 4);
        for c in harmonious.iter().chain(&monochrome) {
            assert!(is_canonical_hex(c), "bad hex {c}");
        }
    }

    // -- Helpers --

    #[test]
    fn lightness_step_spreads_evenly() {
        assert_eq!(lightness_step(LIGHTNESS_RANGE, 5), 12.5);
        assert_eq!(lightness_step(MONOCHROME_LIGHTNESS_RANGE, 4), 20.0);
        assert_eq!(lightness_step(LIGHTNESS_RANGE, 1), 50.0);
    }

    mod proptests {
        use super::*;
        // proptest's prelude also exports a `Strategy` trait.
        use crate::generator::Strategy;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_strategy_returns_requested_count(
                seed: u64,
                count in 1_usize..24,
                base in "#[0-9a-f]{6}",
            ) {
                for strategy in Strategy::ALL {
                    let palette = seeded(seed).generate(strategy, Some(&base), Some("warm"), count);
                    prop_assert_eq!(palette.len(), count, "{}", strategy.name());
                    // Triad and complementary echo the seed first; it is canonical here too.
                    for c in &palette {
                        prop_assert!(is_canonical_hex(c), "{}: bad hex {}", strategy.name(), c);
                    }
                }
            }

            #[test]
            fn unseeded_harmonious_lightness_within_bounds(seed: u64, count in 1_usize..16) {
                for c in seeded(seed).harmonious(count, None) {
                    let hsl = rgb_to_hsl(hex_to_rgb(&c).unwrap());
                    // 8-bit quantization can move lightness by under a percent.
                    prop_assert!(hsl.l >= 19.0 && hsl.l <= 86.0, "{} has l = {}", c, hsl.l);
                }
            }

            #[test]
            fn fallback_never_panics_on_arbitrary_input(
                seed: u64,
                base in ".{0,12}",
                count in 1_usize..8,
            ) {
                let mut generator = seeded(seed);
                prop_assert_eq!(generator.analogous(&base, count).len(), count);
                prop_assert_eq!(generator.monochrome(&base, count).len(), count);
                prop_assert_eq!(generator.triad(&base, count).len(), count);
                prop_assert_eq!(generator.complementary(&base, count).len(), count);
            }
        }
    }
}
