//! # chroma-wcag
//!
//! Color space conversion and WCAG 2.x contrast analysis.
//!
//! Converts between hex, RGB, HSL and CMYK; computes relative luminance,
//! contrast ratios and AA/AAA conformance; converts to grayscale; searches a
//! catalog of the 140 named web colors; and solves for the HSL lightness that
//! reaches a target luminance.
//!
//! ## Features
//!
//! - **Pure functions**: every conversion is a value-in, value-out function
//!   with no shared state
//! - **RGB pivot**: all cross-space conversions go through [`color::Rgb`]
//! - **Exact WCAG constants**: thresholds and weights as published
//! - **Multiple outputs**: plain or ANSI text, JSON (with `serde`), WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use chroma_wcag::prelude::*;
//!
//! let rgb = hex_to_rgb("#FF217A")?;
//! let lum = relative_luminance(rgb);
//! let on_black = contrast_ratio(lum, 0.0);
//! assert!(wcag_compliance(on_black).aa_normal);
//! # Ok::<(), chroma_wcag::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for color types and reports
//! - `config`: YAML configuration file support
//! - `cli`: the `chroma-report` binary
//! - `wasm`: WebAssembly bindings
//! - `full`: `serde`, `config` and `cli`
//!
//! ## References
//!
//! - W3C (2008). *Web Content Accessibility Guidelines (WCAG) 2.0*, §1.4.3,
//!   definitions of relative luminance and contrast ratio.
//! - ITU-R Recommendation BT.601 (luma weights).
//! - Joblove, G. H., & Greenberg, D. (1978). "Color spaces for computer graphics."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color space conversions.
pub mod color;

/// Hex notation parsing and formatting.
pub mod hex;

/// WCAG relative luminance and contrast.
pub mod luminance;

/// BT.601 grayscale conversion.
pub mod grayscale;

// ============================================================================
// Higher-Level Modules
// ============================================================================

/// Named web color catalog.
pub mod catalog;

/// Lightness solver for target luminance.
pub mod solver;

/// Per-color reports.
pub mod report;

/// Text rendering.
pub mod output;

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chroma-wcag operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use chroma_wcag::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{ColorFilter, NamedColor};
    pub use crate::color::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl, Cmyk, Hsl, Rgb};
    pub use crate::error::{Error, Result};
    pub use crate::grayscale::to_grayscale;
    pub use crate::hex::{hex_to_rgb, rgb_to_hex, Hex};
    pub use crate::luminance::{
        contrast_pairings, contrast_ratio, relative_luminance, wcag_compliance, ContrastCheck,
        ContrastPairing, WcagCompliance, WcagLevel,
    };
    pub use crate::output::TextRenderer;
    pub use crate::report::{ColorReport, GrayscaleReport};
    pub use crate::solver::{
        ideal_contrast, lightness_for_luminance, IdealContrast, Solver, SolverConfig,
        IDEAL_CONTRAST_LUMINANCE,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_pipeline() {
        let report = ColorReport::from_hex("#FF217A").unwrap();
        let gray = to_grayscale(report.rgb);
        assert_eq!(rgb_to_hex(gray).unwrap(), report.grayscale.hex);
        assert_eq!(report.contrasts[0].pairing, ContrastPairing::ColorOnWhite);
    }
}
