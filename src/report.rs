//! Everything derived from one color, computed in a single pass.
//!
//! A [`ColorReport`] is the pure counterpart of an inspector panel: all
//! representations, WCAG luminance, the four white/black contrast pairings,
//! and the grayscale equivalent with its own representations.

use crate::color::{Cmyk, Hsl, Rgb};
use crate::error::Result;
use crate::grayscale::to_grayscale;
use crate::hex::Hex;
use crate::luminance::{contrast_pairings, relative_luminance, ContrastCheck, ContrastPairing};

/// Representations of a grayscale equivalent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrayscaleReport {
    /// Gray RGB (all channels equal).
    pub rgb: Rgb,
    /// Gray hex.
    pub hex: Hex,
    /// Gray HSL (hue and saturation 0).
    pub hsl: Hsl,
    /// Gray CMYK (cyan, magenta and yellow 0).
    pub cmyk: Cmyk,
}

impl GrayscaleReport {
    /// Grayscale equivalent of `rgb`.
    pub fn from_rgb(rgb: Rgb) -> Result<Self> {
        let gray = to_grayscale(rgb);
        Ok(Self {
            rgb: gray,
            hex: gray.to_hex()?,
            hsl: gray.to_hsl(),
            cmyk: gray.to_cmyk(),
        })
    }
}

/// All derived values for a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorReport {
    /// Source color.
    pub rgb: Rgb,
    /// Hex notation.
    pub hex: Hex,
    /// HSL.
    pub hsl: Hsl,
    /// CMYK.
    pub cmyk: Cmyk,
    /// WCAG relative luminance.
    pub luminance: f64,
    /// Contrast against white and black, in [`ContrastPairing::ALL`] order.
    pub contrasts: [ContrastCheck; 4],
    /// Grayscale equivalent.
    pub grayscale: GrayscaleReport,
}

impl ColorReport {
    /// Report for an RGB color.
    ///
    /// Fails with [`crate::Error::OutOfRange`] if a channel has no hex form.
    pub fn from_rgb(rgb: Rgb) -> Result<Self> {
        Ok(Self {
            rgb,
            hex: rgb.to_hex()?,
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
            luminance: relative_luminance(rgb),
            contrasts: contrast_pairings(rgb),
            grayscale: GrayscaleReport::from_rgb(rgb)?,
        })
    }

    /// Report for a hex string.
    pub fn from_hex(input: &str) -> Result<Self> {
        Self::from_rgb(Hex::parse(input)?.to_rgb())
    }

    /// Report for an HSL color.
    pub fn from_hsl(hsl: Hsl) -> Result<Self> {
        Self::from_rgb(hsl.to_rgb())
    }

    /// Report for a CMYK color.
    pub fn from_cmyk(cmyk: Cmyk) -> Result<Self> {
        Self::from_rgb(cmyk.to_rgb())
    }

    /// The check for one pairing.
    #[must_use]
    pub fn contrast(&self, pairing: ContrastPairing) -> &ContrastCheck {
        // `contrasts` is built from `ContrastPairing::ALL`, so the position is fixed.
        let idx = ContrastPairing::ALL
            .iter()
            .position(|p| *p == pairing)
            .unwrap_or(0);
        &self.contrasts[idx]
    }
}

impl TryFrom<Rgb> for ColorReport {
    type Error = crate::Error;

    fn try_from(rgb: Rgb) -> Result<Self> {
        Self::from_rgb(rgb)
    }
}
