//! Grayscale conversion using ITU-R BT.601 luma weights.
//!
//! These are broadcast luma weights applied to gamma-encoded channels. They
//! are not the WCAG luminance weights in [`crate::luminance`], and the two
//! must not be mixed.

use crate::color::Rgb;

/// BT.601 red weight.
pub const LUMA_RED: f64 = 0.299;
/// BT.601 green weight.
pub const LUMA_GREEN: f64 = 0.587;
/// BT.601 blue weight.
pub const LUMA_BLUE: f64 = 0.114;

/// BT.601 luma of a color, on the 0-255 scale.
#[must_use]
pub fn luma(rgb: Rgb) -> f64 {
    LUMA_RED * rgb.r + LUMA_GREEN * rgb.g + LUMA_BLUE * rgb.b
}

/// Grayscale equivalent of a color: every channel set to its luma.
///
/// Idempotent up to floating-point error, since the weights sum to 1.
#[must_use]
pub fn to_grayscale(rgb: Rgb) -> Rgb {
    let gray = luma(rgb);
    Rgb::new(gray, gray, gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_channels_equal() {
        let gray = to_grayscale(Rgb::from_u8(255, 33, 122));
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
        assert!((gray.r - 109.524).abs() < 1e-9, "luma: {}", gray.r);
    }

    #[test]
    fn test_grayscale_primaries() {
        assert!((luma(Rgb::from_u8(255, 0, 0)) - 76.245).abs() < 1e-9);
        assert!((luma(Rgb::from_u8(0, 255, 0)) - 149.685).abs() < 1e-9);
        assert!((luma(Rgb::from_u8(0, 0, 255)) - 29.07).abs() < 1e-9);
    }

    #[test]
    fn test_grayscale_extremes_fixed() {
        assert_eq!(to_grayscale(Rgb::BLACK), Rgb::BLACK);
        let white = to_grayscale(Rgb::WHITE);
        assert!((white.r - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let once = to_grayscale(Rgb::from_u8(12, 200, 77));
        let twice = to_grayscale(once);
        assert!((once.r - twice.r).abs() < 1e-9);
    }

    #[test]
    fn test_grayscale_rounds_to_hex() {
        let gray = to_grayscale(Rgb::from_u8(255, 33, 122));
        assert_eq!(gray.to_hex().unwrap().to_string(), "#6E6E6E");
    }
}
