//! Hexadecimal color notation.
//!
//! Input accepts an optional leading `#` followed by either 6 hex digits or
//! the 3-digit shorthand (`#F0A` is `#FF00AA`), in any case. Output is always
//! the canonical `#RRGGBB` uppercase form.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// An 8-bit-per-channel color in hex notation.
///
/// `Display` renders the canonical `#RRGGBB` uppercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hex([u8; 3]);

impl Hex {
    /// Create a hex color from 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` (case-insensitive).
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            tracing::debug!(input, "rejected hex color with non-hex characters");
            return Err(Error::invalid_format(input, "contains non-hex characters"));
        }

        let channels = match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, nibble) in out.iter_mut().zip(digits.bytes()) {
                    let v = hex_value(nibble);
                    *slot = (v << 4) | v;
                }
                out
            }
            6 => {
                let bytes = digits.as_bytes();
                let mut out = [0u8; 3];
                for (slot, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
                    *slot = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
                }
                out
            }
            _ => {
                tracing::debug!(
                    input,
                    len = digits.len(),
                    "rejected hex color of wrong length"
                );
                return Err(Error::invalid_format(input, "expected 3 or 6 hex digits"));
            }
        };

        Ok(Self(channels))
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Channels as an array.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        self.0
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_u8(self.r(), self.g(), self.b())
    }
}

// Caller has already checked `is_ascii_hexdigit`.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Hex> for Rgb {
    fn from(hex: Hex) -> Self {
        hex.to_rgb()
    }
}

impl TryFrom<Rgb> for Hex {
    type Error = Error;

    fn try_from(rgb: Rgb) -> Result<Self> {
        rgb_to_hex(rgb)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hex {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hex {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Rgb {
    /// Convert to canonical hex notation. See [`rgb_to_hex`].
    pub fn to_hex(self) -> Result<Hex> {
        rgb_to_hex(self)
    }
}

/// Parse a hex color string into RGB.
pub fn hex_to_rgb(input: &str) -> Result<Rgb> {
    Hex::parse(input).map(Hex::to_rgb)
}

/// Convert RGB to hex notation.
///
/// Each channel is rounded to the nearest integer. A channel that is not
/// finite or does not round into `[0, 255]` has no two-digit hex form and
/// fails with [`Error::OutOfRange`] instead of being altered.
pub fn rgb_to_hex(rgb: Rgb) -> Result<Hex> {
    Ok(Hex::new(
        hex_channel("red", rgb.r)?,
        hex_channel("green", rgb.g)?,
        hex_channel("blue", rgb.b)?,
    ))
}

fn hex_channel(component: &'static str, value: f64) -> Result<u8> {
    let rounded = value.round();
    if (0.0..=255.0).contains(&rounded) {
        return Ok(rounded as u8);
    }

    tracing::debug!(component, value, "rejected channel outside the hex range");
    Err(Error::OutOfRange {
        component,
        value,
        min: 0.0,
        max: 255.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digits() {
        let rgb = hex_to_rgb("#FF217A").unwrap();
        assert_eq!(rgb, Rgb::from_u8(255, 33, 122));
    }

    #[test]
    fn test_parse_without_hash_and_lowercase() {
        assert_eq!(hex_to_rgb("ff217a").unwrap(), Rgb::from_u8(255, 33, 122));
        assert_eq!(
            hex_to_rgb("#aBcDeF").unwrap(),
            Rgb::from_u8(0xAB, 0xCD, 0xEF)
        );
    }

    #[test]
    fn test_parse_shorthand_duplicates_digits() {
        assert_eq!(Hex::parse("#F0A").unwrap(), Hex::new(0xFF, 0x00, 0xAA));
        assert_eq!(Hex::parse("abc").unwrap(), Hex::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        for input in ["", "#", "#12", "#1234", "#12345", "#1234567", "##FFF"] {
            let err = Hex::parse(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFormat { .. }),
                "{input} should fail"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = Hex::parse("#GG0000").unwrap_err();
        match err {
            Error::InvalidFormat { input, reason } => {
                assert_eq!(input, "#GG0000");
                assert!(reason.contains("non-hex"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Hex::parse("#12 456").is_err());
        assert!(Hex::parse("+12345").is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte() {
        // Six bytes but not six hex digits
        assert!(Hex::parse("ééé").is_err());
    }

    #[test]
    fn test_from_str() {
        let hex: Hex = "#00ff7f".parse().unwrap();
        assert_eq!(hex.to_string(), "#00FF7F");
    }

    fn hex_string(rgb: Rgb) -> String {
        rgb_to_hex(rgb).unwrap().to_string()
    }

    #[test]
    fn test_rgb_to_hex_canonical() {
        assert_eq!(hex_string(Rgb::from_u8(255, 33, 122)), "#FF217A");
        assert_eq!(hex_string(Rgb::from_u8(0, 0, 0)), "#000000");
        assert_eq!(hex_string(Rgb::from_u8(1, 2, 3)), "#010203");
    }

    #[test]
    fn test_rgb_to_hex_rounds() {
        assert_eq!(hex_string(Rgb::new(127.5, 127.4, 0.5)), "#807F01");
        // Channels that round into range are representable
        assert_eq!(hex_string(Rgb::new(-0.4, 255.4, 128.0)), "#00FF80");
    }

    #[test]
    fn test_rgb_to_hex_rejects_unrepresentable_channels() {
        let cases = [
            (Rgb::new(300.0, 0.0, 0.0), "red"),
            (Rgb::new(0.0, -20.0, 0.0), "green"),
            (Rgb::new(0.0, 0.0, f64::NAN), "blue"),
            (Rgb::new(255.5, 0.0, 0.0), "red"),
            (Rgb::new(0.0, f64::INFINITY, 0.0), "green"),
        ];
        for (rgb, expected) in cases {
            match rgb_to_hex(rgb) {
                Err(Error::OutOfRange { component, .. }) => assert_eq!(component, expected),
                other => panic!("{rgb:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rgb_to_hex_reports_first_bad_channel() {
        match Rgb::new(300.0, -20.0, 128.0).to_hex() {
            Err(Error::OutOfRange {
                component,
                value,
                min,
                max,
            }) => {
                assert_eq!(component, "red");
                assert_eq!(value, 300.0);
                assert_eq!((min, max), (0.0, 255.0));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Hex::try_from(Rgb::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_channel_accessors() {
        let hex = Hex::new(1, 2, 3);
        assert_eq!((hex.r(), hex.g(), hex.b()), (1, 2, 3));
        assert_eq!(hex.to_array(), [1, 2, 3]);
        assert_eq!(Rgb::from(hex), Rgb::new(1.0, 2.0, 3.0));
        assert_eq!(Hex::try_from(Rgb::new(1.0, 2.0, 3.0)).unwrap(), hex);
    }
}
