//! Color types and color space conversions.
//!
//! Provides RGB, HSL and CMYK representations of a single color with
//! conversions between them. RGB is the pivot: every cross-space conversion
//! goes through [`Rgb`], so HSL to CMYK is `Hsl -> Rgb -> Cmyk` rather than a
//! formula of its own.
//!
//! All channels are `f64`. Conversions are real-valued and do not round;
//! rounding is a presentation concern handled by the `Display` impls.
//!
//! # Range policy
//!
//! Constructors and conversions never validate or clamp. Out-of-range input
//! (RGB outside `[0, 255]`, saturation or lightness outside `[0, 100]`) flows
//! through the formulas uncorrected. Hue is cyclic and is wrapped modulo 360
//! inside [`hsl_to_rgb`]. Callers that want a fail-fast contract use the
//! `checked` constructors, which return [`Error::OutOfRange`].
//!
//! Hex is the one representation that cannot carry such values, so
//! [`crate::hex::rgb_to_hex`] rejects them with the same error instead of
//! altering them.
//!
//! # References
//!
//! - Joblove, G. H., & Greenberg, D. (1978). "Color spaces for computer graphics."
//!   *SIGGRAPH '78*, 20-25.

use std::fmt;

use crate::error::{Error, Result};

/// Default number of decimals used when displaying HSL and CMYK values.
pub const DISPLAY_PRECISION: usize = 1;

/// Largest precision accepted by renderers and configuration.
pub const MAX_PRECISION: usize = 10;

/// RGB color with real-valued channels on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: f64,
    /// Green channel (0-255).
    pub g: f64,
    /// Blue channel (0-255).
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    /// Create a new RGB color. Channels are taken as-is.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from 8-bit channels.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Create an RGB color, failing if any channel is outside `[0, 255]`
    /// or not finite.
    pub fn checked(r: f64, g: f64, b: f64) -> Result<Self> {
        check_range("red", r, 0.0, 255.0)?;
        check_range("green", g, 0.0, 255.0)?;
        check_range("blue", b, 0.0, 255.0)?;
        Ok(Self::new(r, g, b))
    }

    /// Saturate every channel into `[0, 255]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 255.0),
            self.g.clamp(0.0, 255.0),
            self.b.clamp(0.0, 255.0),
        )
    }

    /// Round every channel to the nearest integer.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(self.r.round(), self.g.round(), self.b.round())
    }

    /// Whether every channel lies in `[0, 255]`.
    #[must_use]
    pub fn is_in_range(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=255.0).contains(c))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Channels normalized to the unit interval.
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Convert to CMYK.
    #[must_use]
    pub fn to_cmyk(self) -> Cmyk {
        rgb_to_cmyk(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rounded().to_array();
        write!(f, "rgb({}, {}, {})", r as i64, g as i64, b as i64)
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue (0.0-360.0 degrees, cyclic).
    pub h: f64,
    /// Saturation (0.0-100.0).
    pub s: f64,
    /// Lightness (0.0-100.0).
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color. Components are taken as-is.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Create an HSL color, failing if hue is outside `[0, 360)` or
    /// saturation/lightness outside `[0, 100]`.
    ///
    /// Hue is cyclic, so 360 is rejected; its canonical form is 0.
    pub fn checked(h: f64, s: f64, l: f64) -> Result<Self> {
        if !(0.0..360.0).contains(&h) {
            return Err(out_of_range("hue", h, 0.0, 360.0));
        }
        check_range("saturation", s, 0.0, 100.0)?;
        check_range("lightness", l, 0.0, 100.0)?;
        Ok(Self::new(h, s, l))
    }

    /// Hue wrapped into `[0, 360)`.
    #[must_use]
    pub fn normalized_hue(self) -> f64 {
        self.h.rem_euclid(360.0)
    }

    /// Round every component to the nearest integer.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(self.h.round(), self.s.round(), self.l.round())
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DISPLAY_PRECISION);
        let Self { h, s, l } = *self;
        write!(f, "hsl({h:.p$}, {s:.p$}%, {l:.p$}%)")
    }
}

/// CMYK color with every component in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan (0.0-100.0).
    pub c: f64,
    /// Magenta (0.0-100.0).
    pub m: f64,
    /// Yellow (0.0-100.0).
    pub y: f64,
    /// Key/black (0.0-100.0).
    pub k: f64,
}

impl Cmyk {
    /// Create a new CMYK color. Components are taken as-is.
    #[must_use]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Create a CMYK color, failing if any component is outside `[0, 100]`.
    pub fn checked(c: f64, m: f64, y: f64, k: f64) -> Result<Self> {
        check_range("cyan", c, 0.0, 100.0)?;
        check_range("magenta", m, 0.0, 100.0)?;
        check_range("yellow", y, 0.0, 100.0)?;
        check_range("key", k, 0.0, 100.0)?;
        Ok(Self::new(c, m, y, k))
    }

    /// Round every component to the nearest integer.
    #[must_use]
    pub fn rounded(self) -> Self {
        let Self { c, m, y, k } = self;
        Self::new(c.round(), m.round(), y.round(), k.round())
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        cmyk_to_rgb(self)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DISPLAY_PRECISION);
        let Self { c, m, y, k } = *self;
        write!(f, "cmyk({c:.p$}%, {m:.p$}%, {y:.p$}%, {k:.p$}%)")
    }
}

fn check_range(component: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(component, value, min, max))
    }
}

fn out_of_range(component: &'static str, value: f64, min: f64, max: f64) -> Error {
    tracing::debug!(component, value, "rejected out-of-range component");
    Error::OutOfRange {
        component,
        value,
        min,
        max,
    }
}

// ============================================================================
// HSL
// ============================================================================

/// Which channel holds the maximum in an RGB triple.
///
/// Ties resolve in channel order: red, then green, then blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxChannel {
    /// Red is the largest channel.
    Red,
    /// Green is the largest channel.
    Green,
    /// Blue is the largest channel.
    Blue,
}

impl MaxChannel {
    /// Classify a triple by its largest channel.
    #[must_use]
    pub fn of(r: f64, g: f64, b: f64) -> Self {
        if r >= g && r >= b {
            Self::Red
        } else if g >= b {
            Self::Green
        } else {
            Self::Blue
        }
    }
}

/// Convert RGB to HSL.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Hue in sixths of a turn.
    let sextant = match MaxChannel::of(r, g, b) {
        MaxChannel::Red => (g - b) / d + if g < b { 6.0 } else { 0.0 },
        MaxChannel::Green => (b - r) / d + 2.0,
        MaxChannel::Blue => (r - g) / d + 4.0,
    };

    Hsl::new(sextant / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL to RGB. Output channels are real-valued on the 0-255 scale.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(r * 255.0, g * 255.0, b * 255.0)
}

/// Periodic helper for [`hsl_to_rgb`].
///
/// Wraps the phase `t` into `[0, 1)` and evaluates the piecewise channel
/// profile between the lower bound `p` and upper bound `q`: a rising ramp on
/// the first sixth, `q` up to one half, a falling ramp up to two thirds, then
/// `p`.
#[must_use]
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ============================================================================
// CMYK
// ============================================================================

/// Convert RGB to CMYK.
///
/// Pure black returns `(0, 0, 0, 100)` exactly.
#[must_use]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [r, g, b] = rgb.to_unit();
    let k = 1.0 - r.max(g).max(b);

    if k == 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    Cmyk::new(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// Convert CMYK to RGB.
#[must_use]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = cmyk.c / 100.0;
    let m = cmyk.m / 100.0;
    let y = cmyk.y / 100.0;
    let k = cmyk.k / 100.0;

    Rgb::new(
        255.0 * (1.0 - c) * (1.0 - k),
        255.0 * (1.0 - m) * (1.0 - k),
        255.0 * (1.0 - y) * (1.0 - k),
    )
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        cmyk_to_rgb(cmyk)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        rgb_to_cmyk(rgb)
    }
}
