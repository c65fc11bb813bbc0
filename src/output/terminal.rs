//! Plain-text and ANSI rendering of reports, ideal-contrast results and
//! catalog listings.
//!
//! Plain mode emits only printable ASCII. ANSI mode prefixes each color with a
//! 24-bit background swatch (`ESC[48;2;R;G;Bm`) followed by a reset.

use std::fmt::Write as FmtWrite;

use crate::catalog::NamedColor;
use crate::color::{DISPLAY_PRECISION, MAX_PRECISION};
use crate::hex::Hex;
use crate::luminance::{ContrastCheck, WcagLevel};
use crate::report::ColorReport;
use crate::solver::IdealContrast;

const RESET: &str = "\x1b[0m";
const SWATCH_WIDTH: usize = 4;
const LABEL_WIDTH: usize = 12;

/// Renders color data to text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    ansi: bool,
    precision: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Plain text at the default precision.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ansi: false,
            precision: DISPLAY_PRECISION,
        }
    }

    /// Enable or disable 24-bit color swatches.
    #[must_use]
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Decimal places for HSL, CMYK and contrast ratios, capped at
    /// [`MAX_PRECISION`].
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Render everything in a [`ColorReport`].
    #[must_use]
    pub fn render_report(&self, report: &ColorReport) -> String {
        let p = self.precision;
        let mut out = String::with_capacity(512);

        self.heading(&mut out, report.hex, &report.hex.to_string());
        field(&mut out, "RGB", &report.rgb.to_string());
        field(&mut out, "HSL", &format!("{:.p$}", report.hsl));
        field(&mut out, "CMYK", &format!("{:.p$}", report.cmyk));
        field(&mut out, "Luminance", &format!("{:.4}", report.luminance));

        out.push_str("  Contrast\n");
        for check in &report.contrasts {
            self.contrast_line(&mut out, check);
        }

        let gray = &report.grayscale;
        out.push_str("  Grayscale\n");
        let _ = writeln!(out, "    {}{}", self.swatch(gray.hex), gray.hex);
        let _ = writeln!(out, "    {}", gray.rgb);
        let _ = writeln!(out, "    {:.p$}", gray.hsl);
        let _ = writeln!(out, "    {:.p$}", gray.cmyk);

        out
    }

    /// Render an ideal-contrast result.
    #[must_use]
    pub fn render_ideal(&self, ideal: &IdealContrast) -> String {
        let p = self.precision;
        let mut out = String::with_capacity(256);

        let title = format!("{} (hue {:.p$})", ideal.hex, ideal.hsl.h);
        self.heading(&mut out, ideal.hex, &title);
        field(&mut out, "RGB", &ideal.rgb.to_string());
        field(&mut out, "HSL", &format!("{:.p$}", ideal.hsl));
        field(&mut out, "CMYK", &format!("{:.p$}", ideal.cmyk));
        field(&mut out, "Luminance", &format!("{:.4}", ideal.luminance));
        let on_white = format!("{:.p$}:1", ideal.contrast_on_white);
        let on_black = format!("{:.p$}:1", ideal.contrast_on_black);
        field(&mut out, "On white", &on_white);
        field(&mut out, "On black", &on_black);

        out
    }

    /// Render a catalog listing, one color per line.
    ///
    /// Each line shows the name, hex, and the derived RGB, HSL and CMYK
    /// rounded to whole numbers, then the set memberships and any legacy
    /// palette mapping.
    #[must_use]
    pub fn render_catalog(&self, colors: &[&NamedColor]) -> String {
        let mut out = String::with_capacity(colors.len() * 128);

        for color in colors {
            let swatch = self.swatch(color.hex);
            let rgb = color.rgb().to_string();
            let hsl = format!("{:.0}", color.hsl().rounded());
            let cmyk = format!("{:.0}", color.cmyk().rounded());
            let _ = write!(out, "{swatch}{:<22} {}", color.name, color.hex);
            let _ = write!(out, "  {rgb:<18}  {hsl:<20}  {cmyk:<28}");

            let mut tags = Vec::with_capacity(3);
            if color.web_safe {
                tags.push("web-safe");
            }
            if color.basic {
                tags.push("basic");
            }
            if color.extended {
                tags.push("extended");
            }
            let _ = write!(out, "  {}", tags.join(","));

            if let Some(legacy) = color.legacy {
                let _ = write!(out, "  [{} {}", legacy.index, legacy.name);
                if let Some(alias) = legacy.alias {
                    let _ = write!(out, " / {alias}");
                }
                out.push(']');
            }
            out.push('\n');
        }

        let _ = writeln!(out, "{} color(s)", colors.len());
        out
    }

    fn heading(&self, out: &mut String, hex: Hex, title: &str) {
        let _ = writeln!(out, "{}{title}", self.swatch(hex));
    }

    fn contrast_line(&self, out: &mut String, check: &ContrastCheck) {
        let p = self.precision;
        let ratio = format!("{:.p$}:1", check.ratio);
        let _ = write!(out, "    {:<16} {ratio:>8}", check.pairing.label());
        for level in WcagLevel::ALL {
            let passes = check.compliance.passes(level);
            let mark = if passes { "pass" } else { "fail" };
            let _ = write!(out, "  {} {mark}", level.label());
        }
        out.push('\n');
    }

    fn swatch(&self, hex: Hex) -> String {
        if !self.ansi {
            return String::new();
        }
        let [r, g, b] = hex.to_array();
        let pad = " ".repeat(SWATCH_WIDTH);
        format!("\x1b[48;2;{r};{g};{b}m{pad}{RESET} ")
    }
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<width$}{value}", width = LABEL_WIDTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, ColorFilter};
    use crate::color::Rgb;
    use crate::luminance::ContrastPairing;
    use crate::solver::ideal_contrast;

    fn reference() -> ColorReport {
        ColorReport::from_rgb(Rgb::from_u8(255, 33, 122)).unwrap()
    }

    #[test]
    fn test_plain_report_has_no_escapes() {
        let output = TextRenderer::new().render_report(&reference());

        assert!(!output.contains('\x1b'));
        assert!(output.is_ascii());
        assert!(output.starts_with("#FF217A\n"));
        assert!(output.contains("rgb(255, 33, 122)"));
        assert!(output.contains("hsl(335.9, 100.0%, 56.5%)"));
        assert!(output.contains("0.2375"));
        assert!(output.contains("#6E6E6E"));
    }

    #[test]
    fn test_report_lists_every_pairing() {
        let output = TextRenderer::new().precision(2).render_report(&reference());

        for pairing in ContrastPairing::ALL {
            let label = pairing.label();
            assert!(output.contains(label), "missing {label}");
        }
        assert!(output.contains("3.65:1"));
        assert!(output.contains("5.75:1"));
        assert!(output.contains("WCAG AA (Normal) pass"));
        assert!(output.contains("WCAG AAA fail"));
    }

    #[test]
    fn test_ansi_report_contains_swatch() {
        let output = TextRenderer::new().ansi(true).render_report(&reference());

        assert!(output.contains("\x1b[48;2;255;33;122m"));
        assert!(output.contains("\x1b[48;2;110;110;110m"));
        assert!(output.contains(RESET));
    }

    #[test]
    fn test_precision_applies_to_hsl() {
        let output = TextRenderer::new().precision(3).render_report(&reference());
        assert!(output.contains("hsl(335.946, 100.000%, 56.471%)"));

        let capped = TextRenderer::new().precision(99);
        assert_eq!(capped.precision, MAX_PRECISION);
    }

    #[test]
    fn test_render_ideal() {
        let ideal = ideal_contrast(0.0).unwrap();
        let output = TextRenderer::new().precision(2).render_ideal(&ideal);

        assert!(output.contains("(hue 0.00)"));
        assert!(output.contains("On white"));
        assert!(output.contains("4.58:1"));
    }

    #[test]
    fn test_render_catalog_listing() {
        let colors = catalog::filter(&ColorFilter::new().legacy_alias("a"));
        let output = TextRenderer::new().render_catalog(&colors);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), colors.len() + 1);
        assert!(lines[0].starts_with("Aqua"));
        assert!(output.contains("#00FFFF"));
        assert!(output.contains("basic"));
        assert!(output.ends_with("5 color(s)\n"));
    }

    #[test]
    fn test_render_catalog_derived_columns() {
        let aqua = catalog::find("Aqua").unwrap();
        let coral = catalog::find("Coral").unwrap();
        let output = TextRenderer::new().render_catalog(&[aqua, coral]);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("rgb(0, 255, 255)"));
        assert!(lines[0].contains("hsl(180, 100%, 50%)"));
        assert!(lines[0].contains("cmyk(100%, 0%, 0%, 0%)"));
        assert!(lines[0].contains("[11 Cyan / Aqua]"));

        assert!(lines[1].contains("rgb(255, 127, 80)"));
        assert!(lines[1].contains("hsl(16, 100%, 66%)"));
        assert!(lines[1].contains("cmyk(0%, 50%, 69%, 0%)"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let output = TextRenderer::new().ansi(true).render_catalog(&[]);
        assert_eq!(output, "0 color(s)\n");
    }
}
