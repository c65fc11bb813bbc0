//! Inverse luminance: find the HSL lightness that produces a target WCAG
//! relative luminance for a fixed hue and saturation.
//!
//! For fixed hue and saturation in `[0, 100]`, every channel of
//! [`hsl_to_rgb`] is non-decreasing in lightness (both `p` and `q` grow with
//! `l`, and each channel is a fixed convex mix of the two). The WCAG transfer
//! function is increasing on each side of its `0.03928` threshold but steps
//! down by about `7.5e-7` across it, so luminance is non-decreasing in
//! lightness up to that step and bisection lands within it of the best.
//! Saturation outside `[0, 100]` breaks the argument; the solver still
//! returns the best midpoint it sampled.

use crate::color::{hsl_to_rgb, Cmyk, Hsl, Rgb};
use crate::error::Result;
use crate::hex::Hex;
use crate::luminance::{contrast_ratio, relative_luminance, BLACK_LUMINANCE, WHITE_LUMINANCE};

/// The luminance whose contrast against white equals its contrast against
/// black: `sqrt(1.05 * 0.05) - 0.05`.
pub const IDEAL_CONTRAST_LUMINANCE: f64 = 0.179_128_784_7;

/// Saturation used for ideal-contrast colors.
pub const IDEAL_CONTRAST_SATURATION: f64 = 100.0;

/// Limits for the lightness bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Maximum number of bisection steps (one luminance evaluation each).
    pub max_iterations: u32,
    /// Stop early once `|luminance - target|` drops below this.
    pub tolerance: f64,
}

impl SolverConfig {
    /// Default step limit.
    pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
    /// Default early-exit tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-7;
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

/// Result of a lightness solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Best lightness found, in `[0, 100]`.
    pub lightness: f64,
    /// Luminance at that lightness.
    pub luminance: f64,
    /// Luminance evaluations performed.
    pub iterations: u32,
}

impl Solution {
    /// Absolute distance from the requested luminance.
    #[must_use]
    pub fn residual(&self, target: f64) -> f64 {
        (self.luminance - target).abs()
    }
}

/// Bisection solver over HSL lightness.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the given limits.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver's limits.
    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Find the lightness closest to `target` luminance.
    ///
    /// Always returns a value. With zero iterations the result is the
    /// initial midpoint guess, 50.
    #[must_use]
    pub fn solve(&self, hue: f64, saturation: f64, target: f64) -> Solution {
        let luminance_at = |l: f64| relative_luminance(hsl_to_rgb(Hsl::new(hue, saturation, l)));

        let mut low = 0.0_f64;
        let mut high = 100.0_f64;
        let mut best = 50.0_f64;
        let mut best_diff = f64::INFINITY;
        let mut best_luminance = f64::NAN;
        let mut iterations = 0;

        while iterations < self.config.max_iterations {
            iterations += 1;
            let mid = (low + high) / 2.0;
            let luminance = luminance_at(mid);
            let diff = (luminance - target).abs();

            if diff < best_diff {
                best_diff = diff;
                best = mid;
                best_luminance = luminance;
            }

            if luminance < target {
                low = mid;
            } else {
                high = mid;
            }

            if diff < self.config.tolerance {
                break;
            }
        }

        if best_luminance.is_nan() {
            best_luminance = luminance_at(best);
        }

        tracing::trace!(
            hue,
            saturation,
            target,
            lightness = best,
            iterations,
            residual = best_diff,
            "solved lightness"
        );

        Solution {
            lightness: best,
            luminance: best_luminance,
            iterations,
        }
    }
}

/// Find the HSL lightness in `[0, 100]` whose relative luminance is closest
/// to `target`, for the given hue (degrees) and saturation (percent).
///
/// Uses at most 50 bisection steps and stops early within `1e-7`.
#[must_use]
pub fn lightness_for_luminance(hue: f64, saturation: f64, target: f64) -> f64 {
    Solver::default().solve(hue, saturation, target).lightness
}

/// A color of given hue that reads equally well on white and on black.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IdealContrast {
    /// HSL of the solved color (hue and saturation as requested).
    pub hsl: Hsl,
    /// RGB of the solved color.
    pub rgb: Rgb,
    /// Hex of the solved color.
    pub hex: Hex,
    /// CMYK of the solved color.
    pub cmyk: Cmyk,
    /// Achieved relative luminance.
    pub luminance: f64,
    /// Contrast against a white background.
    pub contrast_on_white: f64,
    /// Contrast against a black background.
    pub contrast_on_black: f64,
}

/// Ideal-contrast color for `hue` at full saturation with default limits.
pub fn ideal_contrast(hue: f64) -> Result<IdealContrast> {
    ideal_contrast_with(
        hue,
        &SolverConfig::default(),
        IDEAL_CONTRAST_SATURATION,
        IDEAL_CONTRAST_LUMINANCE,
    )
}

/// Ideal-contrast color with explicit limits, saturation and target.
///
/// Fails with [`crate::Error::OutOfRange`] when a saturation outside
/// `[0, 100]` drives the solved color out of the hex range.
pub fn ideal_contrast_with(
    hue: f64,
    config: &SolverConfig,
    saturation: f64,
    target: f64,
) -> Result<IdealContrast> {
    let solution = Solver::new(*config).solve(hue, saturation, target);
    let hsl = Hsl::new(hue, saturation, solution.lightness);
    let rgb = hsl_to_rgb(hsl);
    let luminance = relative_luminance(rgb);

    Ok(IdealContrast {
        hsl,
        rgb,
        hex: rgb.to_hex()?,
        cmyk: rgb.to_cmyk(),
        luminance,
        contrast_on_white: contrast_ratio(WHITE_LUMINANCE, luminance),
        contrast_on_black: contrast_ratio(luminance, BLACK_LUMINANCE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_luminance_constant() {
        let exact = (1.05_f64 * 0.05).sqrt() - 0.05;
        assert!((IDEAL_CONTRAST_LUMINANCE - exact).abs() < 1e-10);
    }

    #[test]
    fn test_achromatic_solve() {
        let lightness = lightness_for_luminance(0.0, 0.0, IDEAL_CONTRAST_LUMINANCE);
        assert!(
            (lightness - 46.031_332).abs() < 1e-4,
            "lightness: {lightness}"
        );
        let lum = relative_luminance(hsl_to_rgb(Hsl::new(0.0, 0.0, lightness)));
        assert!((lum - IDEAL_CONTRAST_LUMINANCE).abs() < 1e-6);
    }

    #[test]
    fn test_saturated_red_solve() {
        let lightness = lightness_for_luminance(0.0, 100.0, IDEAL_CONTRAST_LUMINANCE);
        assert!(
            (lightness - 46.366_048).abs() < 1e-4,
            "lightness: {lightness}"
        );
    }

    #[test]
    fn test_saturated_hues_hit_target() {
        for hue in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 333.3] {
            let solution = Solver::default().solve(hue, 100.0, IDEAL_CONTRAST_LUMINANCE);
            assert!(
                solution.residual(IDEAL_CONTRAST_LUMINANCE) < 1e-6,
                "hue {hue}: residual {}",
                solution.residual(IDEAL_CONTRAST_LUMINANCE)
            );
            assert!((0.0..=100.0).contains(&solution.lightness));
        }
    }

    #[test]
    fn test_iteration_cap() {
        let solution = Solver::default().solve(200.0, 70.0, 0.42);
        assert!(solution.iterations <= 50);

        let config = SolverConfig {
            max_iterations: 1,
            tolerance: 0.0,
        };
        let one = Solver::new(config).solve(0.0, 0.0, 0.9);
        assert_eq!(one.iterations, 1);
        assert_eq!(one.lightness, 50.0);
    }

    #[test]
    fn test_zero_iterations_returns_initial_guess() {
        let config = SolverConfig {
            max_iterations: 0,
            tolerance: 1e-7,
        };
        let solution = Solver::new(config).solve(10.0, 50.0, 0.5);
        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.lightness, 50.0);
        assert!(solution.luminance.is_finite());
    }

    #[test]
    fn test_extreme_targets_clamp_to_bounds() {
        let dark = lightness_for_luminance(90.0, 100.0, 0.0);
        assert!(dark < 1e-3, "dark: {dark}");
        let light = lightness_for_luminance(90.0, 100.0, 1.0);
        assert!(light > 100.0 - 1e-3, "light: {light}");
    }

    #[test]
    fn test_unreachable_target_returns_closest() {
        // Nothing exceeds white; the solver walks up to lightness 100
        let solution = Solver::default().solve(0.0, 0.0, 2.0);
        assert!(solution.lightness > 99.999);
        assert!((solution.luminance - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ideal_contrast_balances_white_and_black() {
        let ideal = ideal_contrast(0.0).unwrap();
        let on_white = ideal.contrast_on_white;
        assert!((on_white - ideal.contrast_on_black).abs() < 1e-4);
        assert!((on_white - 4.582_575_695).abs() < 1e-4);
        assert_eq!(ideal.hsl.s, 100.0);
        assert_eq!(ideal.hsl.h, 0.0);
        assert_eq!(ideal.hex, ideal.rgb.to_hex().unwrap());
    }

    #[test]
    fn test_ideal_contrast_with_custom_target() {
        let ideal = ideal_contrast_with(210.0, &SolverConfig::default(), 60.0, 0.5).unwrap();
        assert!((ideal.luminance - 0.5).abs() < 1e-6);
        assert_eq!(ideal.hsl.s, 60.0);
    }

    #[test]
    fn test_ideal_contrast_rejects_oversaturated_color() {
        // Saturation 150 pushes one channel below 0 or above 255 at every lightness
        let result = ideal_contrast_with(0.0, &SolverConfig::default(), 150.0, 0.18);
        assert!(matches!(result, Err(crate::Error::OutOfRange { .. })));
    }
}
