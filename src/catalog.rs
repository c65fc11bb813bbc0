//! Named web colors.
//!
//! The 140 standard named colors of the extended web color set, in
//! alphabetical order, with their web-safe / basic-16 / extended membership
//! and, for the 18 names that correspond to the legacy 16-color palette, the
//! palette index and palette name.
//!
//! The table stores hex only. RGB, HSL and CMYK are derived on demand.
//!
//! Filtering is a pure function of the table and a [`ColorFilter`]; nothing
//! here holds filter state.

use crate::color::{Cmyk, Hsl, Rgb};
use crate::hex::Hex;

/// Correspondence of a named color to the legacy 16-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LegacyPaletteEntry {
    /// Palette index (0-15).
    pub index: u8,
    /// Palette name for this index.
    pub name: &'static str,
    /// Alternate name the palette uses for this color, if any.
    pub alias: Option<&'static str>,
}

impl LegacyPaletteEntry {
    /// Create a palette entry.
    #[must_use]
    pub const fn new(index: u8, name: &'static str, alias: Option<&'static str>) -> Self {
        Self { index, name, alias }
    }
}

/// One entry of the named color table.
///
/// Serializes with its derived RGB, HSL and CMYK alongside the stored
/// fields, HSL and CMYK rounded to whole numbers as in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedColor {
    /// Color name, unique within the catalog.
    pub name: &'static str,
    /// Canonical value.
    pub hex: Hex,
    /// Member of the 216-color web-safe palette.
    pub web_safe: bool,
    /// Member of the 16 basic HTML colors.
    pub basic: bool,
    /// Member of the extended color keyword set.
    pub extended: bool,
    /// Legacy 16-color palette mapping, when one exists.
    pub legacy: Option<LegacyPaletteEntry>,
}

impl NamedColor {
    /// RGB value.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        self.hex.to_rgb()
    }

    /// HSL value.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        self.rgb().to_hsl()
    }

    /// CMYK value.
    #[must_use]
    pub fn cmyk(&self) -> Cmyk {
        self.rgb().to_cmyk()
    }

    /// Whether this color maps onto the legacy 16-color palette.
    #[must_use]
    pub const fn has_legacy_mapping(&self) -> bool {
        self.legacy.is_some()
    }
}

/// Serialized form of a [`NamedColor`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct NamedColorRow {
    name: &'static str,
    hex: Hex,
    rgb: Rgb,
    hsl: Hsl,
    cmyk: Cmyk,
    web_safe: bool,
    basic: bool,
    extended: bool,
    legacy: Option<LegacyPaletteEntry>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for NamedColor {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let row = NamedColorRow {
            name: self.name,
            hex: self.hex,
            rgb: self.rgb(),
            hsl: self.hsl().rounded(),
            cmyk: self.cmyk().rounded(),
            web_safe: self.web_safe,
            basic: self.basic,
            extended: self.extended,
            legacy: self.legacy,
        };
        serde::Serialize::serialize(&row, serializer)
    }
}

/// Conjunction of optional predicates over [`NamedColor`] fields.
///
/// Text predicates are case-insensitive substring matches. An empty text
/// predicate is the same as an absent one. A non-empty predicate on a legacy
/// field never matches a color without a legacy mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFilter {
    name: Option<String>,
    web_safe: Option<bool>,
    basic: Option<bool>,
    extended: Option<bool>,
    legacy_index: Option<String>,
    legacy_name: Option<String>,
    legacy_alias: Option<String>,
}

fn needle(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |n| haystack.to_lowercase().contains(n))
}

impl ColorFilter {
    /// A filter that matches every color.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match colors whose name contains `text`.
    #[must_use]
    pub fn name(mut self, text: &str) -> Self {
        self.name = needle(text);
        self
    }

    /// Match colors by web-safe membership.
    #[must_use]
    pub fn web_safe(mut self, web_safe: bool) -> Self {
        self.web_safe = Some(web_safe);
        self
    }

    /// Match colors by basic-16 membership.
    #[must_use]
    pub fn basic(mut self, basic: bool) -> Self {
        self.basic = Some(basic);
        self
    }

    /// Match colors by extended-set membership.
    #[must_use]
    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = Some(extended);
        self
    }

    /// Match colors whose legacy palette index, in decimal, contains `text`.
    #[must_use]
    pub fn legacy_index(mut self, text: &str) -> Self {
        self.legacy_index = needle(text);
        self
    }

    /// Match colors whose legacy palette name contains `text`.
    #[must_use]
    pub fn legacy_name(mut self, text: &str) -> Self {
        self.legacy_name = needle(text);
        self
    }

    /// Match colors whose legacy palette alias contains `text`.
    #[must_use]
    pub fn legacy_alias(mut self, text: &str) -> Self {
        self.legacy_alias = needle(text);
        self
    }

    /// Whether no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `color` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, color: &NamedColor) -> bool {
        let flag = |want: Option<bool>, have: bool| want.map_or(true, |w| w == have);

        if !(flag(self.web_safe, color.web_safe)
            && flag(self.basic, color.basic)
            && flag(self.extended, color.extended)
            && contains_ci(color.name, self.name.as_deref()))
        {
            return false;
        }

        let legacy = color.legacy;
        let index = legacy.map(|l| l.index.to_string()).unwrap_or_default();
        let name = legacy.map_or("", |l| l.name);
        let alias = legacy.and_then(|l| l.alias).unwrap_or("");

        contains_ci(&index, self.legacy_index.as_deref())
            && contains_ci(name, self.legacy_name.as_deref())
            && contains_ci(alias, self.legacy_alias.as_deref())
    }
}

/// The full catalog in shipped order.
#[must_use]
pub fn all() -> &'static [NamedColor] {
    CATALOG
}

/// Colors matching `filter`, in catalog order.
#[must_use]
pub fn filter(filter: &ColorFilter) -> Vec<&'static NamedColor> {
    let matched: Vec<_> = CATALOG.iter().filter(|c| filter.matches(c)).collect();
    tracing::trace!(
        matched = matched.len(),
        total = CATALOG.len(),
        "filtered color catalog"
    );
    matched
}

/// Look up a color by exact name, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static NamedColor> {
    CATALOG.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Every named color with the given value, in catalog order.
#[must_use]
pub fn by_hex(hex: Hex) -> Vec<&'static NamedColor> {
    CATALOG.iter().filter(|c| c.hex == hex).collect()
}

const fn extended(name: &'static str, hex: Hex) -> NamedColor {
    NamedColor {
        name,
        hex,
        web_safe: false,
        basic: false,
        extended: true,
        legacy: None,
    }
}

const fn basic(name: &'static str, hex: Hex, legacy: LegacyPaletteEntry) -> NamedColor {
    NamedColor {
        name,
        hex,
        web_safe: true,
        basic: true,
        extended: true,
        legacy: Some(legacy),
    }
}

#[rustfmt::skip]
static CATALOG: &[NamedColor] = &[
    extended("AliceBlue", Hex::new(0xF0, 0xF8, 0xFF)),
    extended("AntiqueWhite", Hex::new(0xFA, 0xEB, 0xD7)),
    basic("Aqua", Hex::new(0x00, 0xFF, 0xFF), LegacyPaletteEntry::new(11, "Cyan", Some("Aqua"))),
    extended("Aquamarine", Hex::new(0x7F, 0xFF, 0xD4)),
    extended("Azure", Hex::new(0xF0, 0xFF, 0xFF)),
    extended("Beige", Hex::new(0xF5, 0xF5, 0xDC)),
    extended("Bisque", Hex::new(0xFF, 0xE4, 0xC4)),
    basic("Black", Hex::new(0x00, 0x00, 0x00), LegacyPaletteEntry::new(0, "Black", None)),
    extended("BlanchedAlmond", Hex::new(0xFF, 0xEB, 0xCD)),
    basic("Blue", Hex::new(0x00, 0x00, 0xFF), LegacyPaletteEntry::new(9, "Blue", None)),
    extended("BlueViolet", Hex::new(0x8A, 0x2B, 0xE2)),
    extended("Brown", Hex::new(0xA5, 0x2A, 0x2A)),
    extended("BurlyWood", Hex::new(0xDE, 0xB8, 0x87)),
    extended("CadetBlue", Hex::new(0x5F, 0x9E, 0xA0)),
    extended("Chartreuse", Hex::new(0x7F, 0xFF, 0x00)),
    extended("Chocolate", Hex::new(0xD2, 0x69, 0x1E)),
    extended("Coral", Hex::new(0xFF, 0x7F, 0x50)),
    extended("CornflowerBlue", Hex::new(0x64, 0x95, 0xED)),
    extended("Cornsilk", Hex::new(0xFF, 0xF8, 0xDC)),
    extended("Crimson", Hex::new(0xDC, 0x14, 0x3C)),
    basic("Cyan", Hex::new(0x00, 0xFF, 0xFF), LegacyPaletteEntry::new(11, "Cyan", Some("Aqua"))),
    extended("DarkBlue", Hex::new(0x00, 0x00, 0x8B)),
    extended("DarkCyan", Hex::new(0x00, 0x8B, 0x8B)),
    extended("DarkGoldenRod", Hex::new(0xB8, 0x86, 0x0B)),
    extended("DarkGray", Hex::new(0xA9, 0xA9, 0xA9)),
    extended("DarkGreen", Hex::new(0x00, 0x64, 0x00)),
    extended("DarkKhaki", Hex::new(0xBD, 0xB7, 0x6B)),
    extended("DarkMagenta", Hex::new(0x8B, 0x00, 0x8B)),
    extended("DarkOliveGreen", Hex::new(0x55, 0x6B, 0x2F)),
    extended("DarkOrange", Hex::new(0xFF, 0x8C, 0x00)),
    extended("DarkOrchid", Hex::new(0x99, 0x32, 0xCC)),
    extended("DarkRed", Hex::new(0x8B, 0x00, 0x00)),
    extended("DarkSalmon", Hex::new(0xE9, 0x96, 0x7A)),
    extended("DarkSeaGreen", Hex::new(0x8F, 0xBC, 0x8F)),
    extended("DarkSlateBlue", Hex::new(0x48, 0x3D, 0x8B)),
    extended("DarkSlateGray", Hex::new(0x2F, 0x4F, 0x4F)),
    extended("DarkTurquoise", Hex::new(0x00, 0xCE, 0xD1)),
    extended("DarkViolet", Hex::new(0x94, 0x00, 0xD3)),
    extended("DeepPink", Hex::new(0xFF, 0x14, 0x93)),
    extended("DeepSkyBlue", Hex::new(0x00, 0xBF, 0xFF)),
    extended("DimGray", Hex::new(0x69, 0x69, 0x69)),
    extended("DodgerBlue", Hex::new(0x1E, 0x90, 0xFF)),
    extended("FireBrick", Hex::new(0xB2, 0x22, 0x22)),
    extended("FloralWhite", Hex::new(0xFF, 0xFA, 0xF0)),
    extended("ForestGreen", Hex::new(0x22, 0x8B, 0x22)),
    basic("Fuchsia", Hex::new(0xFF, 0x00, 0xFF), LegacyPaletteEntry::new(13, "Magenta", Some("Fuchsia"))),
    extended("Gainsboro", Hex::new(0xDC, 0xDC, 0xDC)),
    extended("GhostWhite", Hex::new(0xF8, 0xF8, 0xFF)),
    extended("Gold", Hex::new(0xFF, 0xD7, 0x00)),
    extended("GoldenRod", Hex::new(0xDA, 0xA5, 0x20)),
    basic("Gray", Hex::new(0x80, 0x80, 0x80), LegacyPaletteEntry::new(7, "LightGray", Some("Gray"))),
    basic("Green", Hex::new(0x00, 0x80, 0x00), LegacyPaletteEntry::new(2, "Green", None)),
    extended("GreenYellow", Hex::new(0xAD, 0xFF, 0x2F)),
    extended("HoneyDew", Hex::new(0xF0, 0xFF, 0xF0)),
    extended("HotPink", Hex::new(0xFF, 0x69, 0xB4)),
    extended("IndianRed", Hex::new(0xCD, 0x5C, 0x5C)),
    extended("Indigo", Hex::new(0x4B, 0x00, 0x82)),
    extended("Ivory", Hex::new(0xFF, 0xFF, 0xF0)),
    extended("Khaki", Hex::new(0xF0, 0xE6, 0x8C)),
    extended("Lavender", Hex::new(0xE6, 0xE6, 0xFA)),
    extended("LavenderBlush", Hex::new(0xFF, 0xF0, 0xF5)),
    extended("LawnGreen", Hex::new(0x7C, 0xFC, 0x00)),
    extended("LemonChiffon", Hex::new(0xFF, 0xFA, 0xCD)),
    extended("LightBlue", Hex::new(0xAD, 0xD8, 0xE6)),
    extended("LightCoral", Hex::new(0xF0, 0x80, 0x80)),
    extended("LightCyan", Hex::new(0xE0, 0xFF, 0xFF)),
    extended("LightGoldenRodYellow", Hex::new(0xFA, 0xFA, 0xD2)),
    extended("LightGray", Hex::new(0xD3, 0xD3, 0xD3)),
    extended("LightGreen", Hex::new(0x90, 0xEE, 0x90)),
    extended("LightPink", Hex::new(0xFF, 0xB6, 0xC1)),
    extended("LightSalmon", Hex::new(0xFF, 0xA0, 0x7A)),
    extended("LightSeaGreen", Hex::new(0x20, 0xB2, 0xAA)),
    extended("LightSkyBlue", Hex::new(0x87, 0xCE, 0xFA)),
    extended("LightSlateGray", Hex::new(0x77, 0x88, 0x99)),
    extended("LightSteelBlue", Hex::new(0xB0, 0xC4, 0xDE)),
    extended("LightYellow", Hex::new(0xFF, 0xFF, 0xE0)),
    basic("Lime", Hex::new(0x00, 0xFF, 0x00), LegacyPaletteEntry::new(10, "Lime", None)),
    extended("LimeGreen", Hex::new(0x32, 0xCD, 0x32)),
    extended("Linen", Hex::new(0xFA, 0xF0, 0xE6)),
    basic("Magenta", Hex::new(0xFF, 0x00, 0xFF), LegacyPaletteEntry::new(13, "Magenta", Some("Fuchsia"))),
    basic("Maroon", Hex::new(0x80, 0x00, 0x00), LegacyPaletteEntry::new(1, "Maroon", None)),
    extended("MediumAquaMarine", Hex::new(0x66, 0xCD, 0xAA)),
    extended("MediumBlue", Hex::new(0x00, 0x00, 0xCD)),
    extended("MediumOrchid", Hex::new(0xBA, 0x55, 0xD3)),
    extended("MediumPurple", Hex::new(0x93, 0x70, 0xDB)),
    extended("MediumSeaGreen", Hex::new(0x3C, 0xB3, 0x71)),
    extended("MediumSlateBlue", Hex::new(0x7B, 0x68, 0xEE)),
    extended("MediumSpringGreen", Hex::new(0x00, 0xFA, 0x9A)),
    extended("MediumTurquoise", Hex::new(0x48, 0xD1, 0xCC)),
    extended("MediumVioletRed", Hex::new(0xC7, 0x15, 0x85)),
    extended("MidnightBlue", Hex::new(0x19, 0x19, 0x70)),
    extended("MintCream", Hex::new(0xF5, 0xFF, 0xFA)),
    extended("MistyRose", Hex::new(0xFF, 0xE4, 0xE1)),
    extended("Moccasin", Hex::new(0xFF, 0xE4, 0xB5)),
    extended("NavajoWhite", Hex::new(0xFF, 0xDE, 0xAD)),
    basic("Navy", Hex::new(0x00, 0x00, 0x80), LegacyPaletteEntry::new(1, "Navy", None)),
    extended("OldLace", Hex::new(0xFD, 0xF5, 0xE6)),
    basic("Olive", Hex::new(0x80, 0x80, 0x00), LegacyPaletteEntry::new(6, "Olive", None)),
    extended("OliveDrab", Hex::new(0x6B, 0x8E, 0x23)),
    extended("Orange", Hex::new(0xFF, 0xA5, 0x00)),
    extended("OrangeRed", Hex::new(0xFF, 0x45, 0x00)),
    extended("Orchid", Hex::new(0xDA, 0x70, 0xD6)),
    extended("PaleGoldenRod", Hex::new(0xEE, 0xE8, 0xAA)),
    extended("PaleGreen", Hex::new(0x98, 0xFB, 0x98)),
    extended("PaleTurquoise", Hex::new(0xAF, 0xEE, 0xEE)),
    extended("PaleVioletRed", Hex::new(0xDB, 0x70, 0x93)),
    extended("PapayaWhip", Hex::new(0xFF, 0xEF, 0xD5)),
    extended("PeachPuff", Hex::new(0xFF, 0xDA, 0xB9)),
    extended("Peru", Hex::new(0xCD, 0x85, 0x3F)),
    extended("Pink", Hex::new(0xFF, 0xC0, 0xCB)),
    extended("Plum", Hex::new(0xDD, 0xA0, 0xDD)),
    extended("PowderBlue", Hex::new(0xB0, 0xE0, 0xE6)),
    basic("Purple", Hex::new(0x80, 0x00, 0x80), LegacyPaletteEntry::new(5, "Purple", None)),
    basic("Red", Hex::new(0xFF, 0x00, 0x00), LegacyPaletteEntry::new(12, "Red", None)),
    extended("RosyBrown", Hex::new(0xBC, 0x8F, 0x8F)),
    extended("RoyalBlue", Hex::new(0x41, 0x69, 0xE1)),
    extended("SaddleBrown", Hex::new(0x8B, 0x45, 0x13)),
    extended("Salmon", Hex::new(0xFA, 0x80, 0x72)),
    extended("SandyBrown", Hex::new(0xF4, 0xA4, 0x60)),
    extended("SeaGreen", Hex::new(0x2E, 0x8B, 0x57)),
    extended("SeaShell", Hex::new(0xFF, 0xF5, 0xEE)),
    extended("Sienna", Hex::new(0xA0, 0x52, 0x2D)),
    basic("Silver", Hex::new(0xC0, 0xC0, 0xC0), LegacyPaletteEntry::new(15, "Silver", None)),
    extended("SkyBlue", Hex::new(0x87, 0xCE, 0xEB)),
    extended("SlateBlue", Hex::new(0x6A, 0x5A, 0xCD)),
    extended("SlateGray", Hex::new(0x70, 0x80, 0x90)),
    extended("Snow", Hex::new(0xFF, 0xFA, 0xFA)),
    extended("SpringGreen", Hex::new(0x00, 0xFF, 0x7F)),
    extended("SteelBlue", Hex::new(0x46, 0x82, 0xB4)),
    extended("Tan", Hex::new(0xD2, 0xB4, 0x8C)),
    basic("Teal", Hex::new(0x00, 0x80, 0x80), LegacyPaletteEntry::new(3, "Teal", None)),
    extended("Thistle", Hex::new(0xD8, 0xBF, 0xD8)),
    extended("Tomato", Hex::new(0xFF, 0x63, 0x47)),
    extended("Turquoise", Hex::new(0x40, 0xE0, 0xD0)),
    extended("Violet", Hex::new(0xEE, 0x82, 0xEE)),
    extended("Wheat", Hex::new(0xF5, 0xDE, 0xB3)),
    basic("White", Hex::new(0xFF, 0xFF, 0xFF), LegacyPaletteEntry::new(15, "White", None)),
    extended("WhiteSmoke", Hex::new(0xF5, 0xF5, 0xF5)),
    basic("Yellow", Hex::new(0xFF, 0xFF, 0x00), LegacyPaletteEntry::new(14, "Yellow", None)),
    extended("YellowGreen", Hex::new(0x9A, 0xCD, 0x32)),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(colors: &[&NamedColor]) -> Vec<&'static str> {
        colors.iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_catalog_size_and_order() {
        let colors = all();
        assert_eq!(colors.len(), 140);
        assert_eq!(colors[0].name, "AliceBlue");
        assert_eq!(colors[139].name, "YellowGreen");
        // Shipped order is case-insensitive alphabetical
        let lower: Vec<String> = colors.iter().map(|c| c.name.to_lowercase()).collect();
        assert!(lower.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_names_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(all().iter().all(|c| seen.insert(c.name)));
    }

    #[test]
    fn test_legacy_mapping_count() {
        let mapped: Vec<_> = all().iter().filter(|c| c.has_legacy_mapping()).collect();
        assert_eq!(mapped.len(), 18);
        assert!(mapped.iter().all(|c| c.web_safe && c.basic && c.extended));
    }

    #[test]
    fn test_derived_values() {
        let coral = find("coral").unwrap();
        assert_eq!(coral.rgb(), Rgb::from_u8(255, 127, 80));
        assert_eq!(coral.hex.to_string(), "#FF7F50");
        let hsl = coral.hsl();
        assert!((hsl.h - 16.114_285_714_3).abs() < 1e-6, "hue: {}", hsl.h);
        let black = find("Black").unwrap();
        assert_eq!(black.cmyk(), Cmyk::new(0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let filter = ColorFilter::new();
        assert!(filter.is_empty());
        assert_eq!(super::filter(&filter).len(), 140);

        let blank = ColorFilter::new().name("").legacy_name("");
        assert!(blank.is_empty());
        assert_eq!(super::filter(&blank).len(), 140);
    }

    #[test]
    fn test_filter_name_case_insensitive() {
        let blues = super::filter(&ColorFilter::new().name("BLUE"));
        assert_eq!(blues.len(), 20);
        assert_eq!(blues[0].name, "AliceBlue");
        assert_eq!(blues[1].name, "Blue");
        assert_eq!(blues[19].name, "SteelBlue");
    }

    #[test]
    fn test_filter_combines_with_and() {
        let filter = ColorFilter::new().name("gray").basic(true);
        assert_eq!(names(&super::filter(&filter)), vec!["Gray"]);

        let filter = ColorFilter::new().name("dark").name("green");
        // Later call replaces the earlier predicate on the same field
        assert_eq!(super::filter(&filter).len(), 16);
    }

    #[test]
    fn test_filter_flags() {
        assert_eq!(super::filter(&ColorFilter::new().web_safe(true)).len(), 18);
        assert_eq!(super::filter(&ColorFilter::new().basic(false)).len(), 122);
        assert_eq!(super::filter(&ColorFilter::new().extended(false)).len(), 0);
    }

    #[test]
    fn test_filter_legacy_fields() {
        let aliased = super::filter(&ColorFilter::new().legacy_alias("a"));
        let expected = ["Aqua", "Cyan", "Fuchsia", "Gray", "Magenta"];
        assert_eq!(names(&aliased), expected);

        let magenta = super::filter(&ColorFilter::new().legacy_name("MAGENTA"));
        assert_eq!(names(&magenta), vec!["Fuchsia", "Magenta"]);

        // Substring on the decimal index: 1, 10-15
        let ones = super::filter(&ColorFilter::new().legacy_index("1"));
        assert_eq!(
            names(&ones).join(" "),
            "Aqua Cyan Fuchsia Lime Magenta Maroon Navy Red Silver White Yellow"
        );
    }

    #[test]
    fn test_filter_legacy_never_matches_unmapped() {
        let filter = ColorFilter::new().name("AliceBlue").legacy_name("a");
        assert!(super::filter(&filter).is_empty());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("rebeccapurple"), None);
        let found = find("LIGHTGOLDENRODYELLOW").unwrap();
        assert_eq!(found.name, "LightGoldenRodYellow");
    }

    #[test]
    fn test_by_hex() {
        let cyan = by_hex(Hex::new(0x00, 0xFF, 0xFF));
        assert_eq!(names(&cyan), vec!["Aqua", "Cyan"]);
        assert!(by_hex(Hex::new(0x12, 0x34, 0x56)).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_includes_derived_values() {
        let coral = serde_json::to_value(find("Coral").unwrap()).unwrap();
        assert_eq!(coral["name"], "Coral");
        assert_eq!(coral["hex"], "#FF7F50");
        assert_eq!(coral["rgb"]["g"], 127.0);
        assert_eq!(coral["hsl"]["h"], 16.0);
        assert_eq!(coral["hsl"]["l"], 66.0);
        assert_eq!(coral["cmyk"]["y"], 69.0);
        assert!(coral["legacy"].is_null());

        let aqua = serde_json::to_value(find("Aqua").unwrap()).unwrap();
        assert_eq!(aqua["cmyk"]["c"], 100.0);
        assert_eq!(aqua["legacy"]["index"], 11);
        assert_eq!(aqua["legacy"]["alias"], "Aqua");
    }
}
