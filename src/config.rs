//! YAML configuration for the solver, ideal-contrast search and text output.
//!
//! Every field has a serde default, so a partial file (or an empty one)
//! yields the built-in behavior for whatever it leaves out.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{DISPLAY_PRECISION, MAX_PRECISION};
use crate::error::{Error, Result};
use crate::solver::{SolverConfig, IDEAL_CONTRAST_LUMINANCE, IDEAL_CONTRAST_SATURATION};

/// Parameters for ideal-contrast searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealContrastConfig {
    /// Saturation (percent) of the solved color.
    #[serde(default = "default_saturation")]
    pub saturation: f64,

    /// Relative luminance to aim for.
    #[serde(default = "default_target_luminance")]
    pub target_luminance: f64,
}

fn default_saturation() -> f64 {
    IDEAL_CONTRAST_SATURATION
}
fn default_target_luminance() -> f64 {
    IDEAL_CONTRAST_LUMINANCE
}

impl Default for IdealContrastConfig {
    fn default() -> Self {
        Self {
            saturation: default_saturation(),
            target_luminance: default_target_luminance(),
        }
    }
}

/// Text output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for HSL, CMYK and ratios.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Emit 24-bit ANSI color swatches.
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

fn default_precision() -> usize {
    DISPLAY_PRECISION
}
fn default_ansi() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            ansi: default_ansi(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Lightness bisection limits.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Ideal-contrast search parameters.
    #[serde(default)]
    pub ideal_contrast: IdealContrastConfig,

    /// Text output settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            solver: SolverConfig::default(),
            ideal_contrast: IdealContrastConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        let config = Self::parse(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }

    /// Checks every value against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            let message = format!("unsupported version {}", self.version);
            return Err(invalid("version", message));
        }
        if self.solver.max_iterations == 0 {
            return Err(invalid("solver.max_iterations", "must be at least 1"));
        }
        let tolerance = self.solver.tolerance;
        if tolerance.is_nan() || tolerance <= 0.0 {
            let message = format!("must be positive, got {tolerance}");
            return Err(invalid("solver.tolerance", message));
        }
        let saturation = self.ideal_contrast.saturation;
        if !(0.0..=100.0).contains(&saturation) {
            let message = format!("{saturation} is outside [0, 100]");
            return Err(invalid("ideal_contrast.saturation", message));
        }
        let target = self.ideal_contrast.target_luminance;
        if !(0.0..=1.0).contains(&target) {
            let message = format!("{target} is outside [0, 1]");
            return Err(invalid("ideal_contrast.target_luminance", message));
        }
        let precision = self.display.precision;
        if precision > MAX_PRECISION {
            let message = format!("{precision} exceeds {MAX_PRECISION}");
            return Err(invalid("display.precision", message));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, message: impl Into<String>) -> Error {
    Error::ConfigInvalid {
        key,
        message: message.into(),
    }
}
