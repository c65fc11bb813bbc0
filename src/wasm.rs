//! WebAssembly bindings for chroma-wcag.
//!
//! Channel tuples cross the boundary as `Float64Array`s in the same order as
//! the Rust types (`[r, g, b]`, `[h, s, l]`, `[c, m, y, k]`). Errors become
//! JavaScript strings.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { hex_to_rgb, relative_luminance, contrast_ratio } from 'chroma-wcag';
//!
//! await init();
//!
//! const [r, g, b] = hex_to_rgb('#FF217A');
//! const ratio = contrast_ratio(1.0, relative_luminance(r, g, b));
//! ```

use wasm_bindgen::prelude::*;

use crate::catalog::{self, ColorFilter};
use crate::color::{self, Cmyk, Hsl, Rgb};
use crate::grayscale;
use crate::hex;
use crate::luminance;
use crate::output::TextRenderer;
use crate::report::ColorReport;
use crate::solver;

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up; present so bundlers get a start hook
}

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// Conversions
// ============================================================================

/// Parse `#RGB` or `#RRGGBB` into `[r, g, b]`.
#[wasm_bindgen]
pub fn hex_to_rgb(input: &str) -> Result<Vec<f64>, JsValue> {
    hex::hex_to_rgb(input)
        .map(|rgb| rgb.to_array().to_vec())
        .map_err(to_js)
}

/// Canonical `#RRGGBB` for an RGB color.
///
/// Channels are rounded; one that is not finite or rounds outside
/// `[0, 255]` is an error.
#[wasm_bindgen]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> Result<String, JsValue> {
    let hex = hex::rgb_to_hex(Rgb::new(r, g, b)).map_err(to_js)?;
    Ok(hex.to_string())
}

/// RGB to `[h, s, l]`.
#[wasm_bindgen]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Vec<f64> {
    let hsl = color::rgb_to_hsl(Rgb::new(r, g, b));
    vec![hsl.h, hsl.s, hsl.l]
}

/// HSL to `[r, g, b]`.
#[wasm_bindgen]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Vec<f64> {
    color::hsl_to_rgb(Hsl::new(h, s, l)).to_array().to_vec()
}

/// RGB to `[c, m, y, k]`.
#[wasm_bindgen]
pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> Vec<f64> {
    let cmyk = color::rgb_to_cmyk(Rgb::new(r, g, b));
    vec![cmyk.c, cmyk.m, cmyk.y, cmyk.k]
}

/// CMYK to `[r, g, b]`.
#[wasm_bindgen]
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Vec<f64> {
    let rgb = color::cmyk_to_rgb(Cmyk::new(c, m, y, k));
    rgb.to_array().to_vec()
}

/// Grayscale equivalent as `[gray, gray, gray]`.
#[wasm_bindgen]
pub fn to_grayscale(r: f64, g: f64, b: f64) -> Vec<f64> {
    let gray = grayscale::to_grayscale(Rgb::new(r, g, b));
    gray.to_array().to_vec()
}

// ============================================================================
// Accessibility
// ============================================================================

/// WCAG relative luminance of an RGB color.
#[wasm_bindgen]
pub fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    luminance::relative_luminance(Rgb::new(r, g, b))
}

/// Contrast ratio between two luminances, in either order.
#[wasm_bindgen]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    luminance::contrast_ratio(l1, l2)
}

/// HSL lightness whose luminance is closest to `target`.
#[wasm_bindgen]
pub fn lightness_for_luminance(hue: f64, saturation: f64, target: f64) -> f64 {
    solver::lightness_for_luminance(hue, saturation, target)
}

/// Plain-text report for a hex color.
#[wasm_bindgen]
pub fn color_report(input: &str) -> Result<String, JsValue> {
    let report = ColorReport::from_hex(input).map_err(to_js)?;
    Ok(TextRenderer::new().render_report(&report))
}

// ============================================================================
// Catalog
// ============================================================================

/// Names of catalog colors matching every given criterion.
///
/// Empty strings and `undefined` flags are ignored.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn filter_catalog(
    name: &str,
    web_safe: Option<bool>,
    basic: Option<bool>,
    extended: Option<bool>,
    legacy_index: &str,
    legacy_name: &str,
    legacy_alias: &str,
) -> Vec<String> {
    let mut filter = ColorFilter::new()
        .name(name)
        .legacy_index(legacy_index)
        .legacy_name(legacy_name)
        .legacy_alias(legacy_alias);
    if let Some(v) = web_safe {
        filter = filter.web_safe(v);
    }
    if let Some(v) = basic {
        filter = filter.basic(v);
    }
    if let Some(v) = extended {
        filter = filter.extended(v);
    }

    catalog::filter(&filter)
        .into_iter()
        .map(|c| c.name.to_string())
        .collect()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(hex_to_rgb("#FF217A").unwrap(), vec![255.0, 33.0, 122.0]);
        assert_eq!(rgb_to_hex(255.0, 33.0, 122.0).unwrap(), "#FF217A");
        assert_eq!(rgb_to_hex(-0.4, 255.4, 0.0).unwrap(), "#00FF00");
    }

    #[test]
    fn test_hsl_vectors() {
        let hsl = rgb_to_hsl(255.0, 0.0, 0.0);
        assert_eq!(hsl, vec![0.0, 100.0, 50.0]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), vec![255.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cmyk_vectors() {
        assert_eq!(rgb_to_cmyk(0.0, 0.0, 0.0), vec![0.0, 0.0, 0.0, 100.0]);
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 0.0), vec![255.0, 255.0, 255.0]);
    }

    #[test]
    fn test_luminance_exports() {
        assert_eq!(relative_luminance(255.0, 255.0, 255.0), 1.0);
        assert!((contrast_ratio(0.0, 1.0) - 21.0).abs() < 1e-12);
        assert_eq!(to_grayscale(0.0, 0.0, 0.0), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_filter_catalog_export() {
        let names = filter_catalog("", None, None, None, "", "", "a");
        assert_eq!(names, vec!["Aqua", "Cyan", "Fuchsia", "Gray", "Magenta"]);
        let web_safe = filter_catalog("", Some(true), None, None, "", "", "");
        assert_eq!(web_safe.len(), 18);
    }

    #[test]
    fn test_color_report_export() {
        let text = color_report("#FF217A").unwrap();
        assert!(text.starts_with("#FF217A"));
    }
}
