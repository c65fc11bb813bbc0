//! WCAG 2.x relative luminance, contrast ratio and conformance levels.
//!
//! The constants here are the ones published in WCAG 2.0/2.1 and must match
//! exactly for compliance testing. Note the linearization threshold is the
//! WCAG value `0.03928`, not the IEC 61966-2-1 value `0.04045`; the two only
//! differ for channel values that no 8-bit input can hit.

use crate::color::Rgb;

/// Linear-segment threshold of the sRGB transfer function (WCAG 2.x).
pub const LINEAR_THRESHOLD: f64 = 0.039_28;
/// Divisor of the linear segment.
pub const LINEAR_DIVISOR: f64 = 12.92;
/// Exponent of the power-law segment.
pub const GAMMA: f64 = 2.4;

/// Red luminosity weight.
pub const RED_WEIGHT: f64 = 0.2126;
/// Green luminosity weight.
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Blue luminosity weight.
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Flare offset added to both luminances in the contrast ratio.
pub const CONTRAST_OFFSET: f64 = 0.05;

/// Relative luminance of white.
pub const WHITE_LUMINANCE: f64 = 1.0;
/// Relative luminance of black.
pub const BLACK_LUMINANCE: f64 = 0.0;

/// Convert one sRGB channel in `[0, 1]` to linear light.
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= LINEAR_THRESHOLD {
        c / LINEAR_DIVISOR
    } else {
        ((c + 0.055) / 1.055).powf(GAMMA)
    }
}

/// Compute the relative luminance of a color per WCAG 2.x.
///
/// Returns a value in `[0, 1]` for in-range input, 0 for black and 1 for
/// white. Out-of-range channels are not clamped.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit();
    RED_WEIGHT * srgb_to_linear(r)
        + GREEN_WEIGHT * srgb_to_linear(g)
        + BLUE_WEIGHT * srgb_to_linear(b)
}

/// Compute the WCAG contrast ratio between two relative luminances.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`. Symmetric in its arguments;
/// in `[1, 21]` for luminances in `[0, 1]`.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + CONTRAST_OFFSET) / (darker + CONTRAST_OFFSET)
}

/// Contrast ratio between two colors.
#[must_use]
pub fn contrast_between(a: Rgb, b: Rgb) -> f64 {
    contrast_ratio(relative_luminance(a), relative_luminance(b))
}

/// WCAG success-criterion levels for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WcagLevel {
    /// AA for large text (18pt, or 14pt bold): 3:1.
    AaLarge,
    /// AA for normal text: 4.5:1.
    AaNormal,
    /// AAA for normal text: 7:1.
    Aaa,
}

impl WcagLevel {
    /// Every level, weakest first.
    pub const ALL: [Self; 3] = [Self::AaLarge, Self::AaNormal, Self::Aaa];

    /// Minimum contrast ratio for this level (inclusive).
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::AaLarge => 3.0,
            Self::AaNormal => 4.5,
            Self::Aaa => 7.0,
        }
    }

    /// Whether `ratio` meets this level.
    #[must_use]
    pub fn passes(self, ratio: f64) -> bool {
        ratio >= self.threshold()
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AaLarge => "WCAG AA (Large)",
            Self::AaNormal => "WCAG AA (Normal)",
            Self::Aaa => "WCAG AAA",
        }
    }
}

/// Pass/fail result for every [`WcagLevel`] at one contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WcagCompliance {
    /// Passes AA for large text (>= 3.0).
    pub aa_large: bool,
    /// Passes AA for normal text (>= 4.5).
    pub aa_normal: bool,
    /// Passes AAA (>= 7.0).
    pub aaa: bool,
}

impl WcagCompliance {
    /// Classify a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            aa_large: WcagLevel::AaLarge.passes(ratio),
            aa_normal: WcagLevel::AaNormal.passes(ratio),
            aaa: WcagLevel::Aaa.passes(ratio),
        }
    }

    /// Result for one level.
    #[must_use]
    pub const fn passes(self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::AaLarge => self.aa_large,
            WcagLevel::AaNormal => self.aa_normal,
            WcagLevel::Aaa => self.aaa,
        }
    }

    /// Strongest level met, if any.
    #[must_use]
    pub fn best_level(self) -> Option<WcagLevel> {
        WcagLevel::ALL
            .into_iter()
            .rev()
            .find(|level| self.passes(*level))
    }
}

/// Classify a contrast ratio against the WCAG thresholds.
#[must_use]
pub fn wcag_compliance(ratio: f64) -> WcagCompliance {
    WcagCompliance::from_ratio(ratio)
}

/// The four text/background pairings checked for every color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContrastPairing {
    /// The color as text on a white background.
    ColorOnWhite,
    /// The color as text on a black background.
    ColorOnBlack,
    /// White text on the color.
    WhiteOnColor,
    /// Black text on the color.
    BlackOnColor,
}

impl ContrastPairing {
    /// Every pairing in display order.
    pub const ALL: [Self; 4] = [
        Self::ColorOnWhite,
        Self::ColorOnBlack,
        Self::WhiteOnColor,
        Self::BlackOnColor,
    ];

    /// Text and background colors for this pairing.
    #[must_use]
    pub const fn resolve(self, color: Rgb) -> (Rgb, Rgb) {
        match self {
            Self::ColorOnWhite => (color, Rgb::WHITE),
            Self::ColorOnBlack => (color, Rgb::BLACK),
            Self::WhiteOnColor => (Rgb::WHITE, color),
            Self::BlackOnColor => (Rgb::BLACK, color),
        }
    }

    /// Luminance of the fixed partner (white or black).
    #[must_use]
    pub const fn partner_luminance(self) -> f64 {
        match self {
            Self::ColorOnWhite | Self::WhiteOnColor => WHITE_LUMINANCE,
            Self::ColorOnBlack | Self::BlackOnColor => BLACK_LUMINANCE,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ColorOnWhite => "Color on White",
            Self::ColorOnBlack => "Color on Black",
            Self::WhiteOnColor => "White on Color",
            Self::BlackOnColor => "Black on Color",
        }
    }
}

/// Contrast of one pairing and its WCAG classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastCheck {
    /// Which pairing was checked.
    pub pairing: ContrastPairing,
    /// Contrast ratio (>= 1).
    pub ratio: f64,
    /// Pass/fail per level.
    pub compliance: WcagCompliance,
}

/// Check a color against white and black in all four pairings.
///
/// White and black luminances are taken as exactly 1 and 0.
#[must_use]
pub fn contrast_pairings(color: Rgb) -> [ContrastCheck; 4] {
    let luminance = relative_luminance(color);
    ContrastPairing::ALL.map(|pairing| {
        let ratio = contrast_ratio(luminance, pairing.partner_luminance());
        ContrastCheck {
            pairing,
            ratio,
            compliance: WcagCompliance::from_ratio(ratio),
        }
    })
}
