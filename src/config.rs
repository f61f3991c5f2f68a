//! Run configuration.
//!
//! Handles loading and validating an optional `config.toml`. Configuration is
//! read-only for the duration of a batch run and safe to share across worker
//! threads.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [detector]
//! strategy = "contour"      # "contour" or "scan"
//! block_size = 11           # Adaptive threshold window (odd, >= 3)
//! constant_c = 2            # Subtracted from the local mean
//! white_threshold = 250     # Channel floor for "white" (scan strategy)
//!
//! [policy]
//! min_border_width = 5      # Narrowest border worth cropping, in pixels
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, so override just the values you want:
//!
//! ```toml
//! # Only switch the detector strategy
//! [detector]
//! strategy = "scan"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Which border detection strategy to run.
///
/// The two strategies have different failure semantics and are deliberately
/// not unified: `Contour` reports a degenerate selection as an error, while
/// `Scan` reports an all-white image as a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Adaptive binarization + morphological closing + outer contours.
    Contour,
    /// Row/column intensity scans inward from each edge.
    Scan,
}

/// Run configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Border detection settings (strategy and its thresholds).
    pub detector: DetectorConfig,
    /// Crop-or-skip decision settings.
    pub policy: PolicyConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.detector.block_size < 3 {
            return Err(ConfigError::Validation(
                "detector.block_size must be at least 3".into(),
            ));
        }
        if self.detector.block_size % 2 == 0 {
            return Err(ConfigError::Validation(
                "detector.block_size must be odd".into(),
            ));
        }
        if self.policy.min_border_width == 0 {
            return Err(ConfigError::Validation(
                "policy.min_border_width must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Load config from a `config.toml` file, validating the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Border detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Strategy to run. `contour` handles unevenly lit margins; `scan` only
    /// recognizes genuinely uniform white margins.
    pub strategy: Strategy,
    /// Side length of the adaptive-threshold window, in pixels. Odd, >= 3.
    pub block_size: u32,
    /// Constant subtracted from the local mean before thresholding.
    pub constant_c: i32,
    /// A pixel counts as white when all three channels reach this value.
    pub white_threshold: u8,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Contour,
            block_size: 11,
            constant_c: 2,
            white_threshold: 250,
        }
    }
}

/// Crop-or-skip decision settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Narrowest border that justifies re-encoding, in pixels. Images whose
    /// widest border falls below this are skipped.
    pub min_border_width: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_border_width: 5,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel image processing workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# deborder configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Border detection
# ---------------------------------------------------------------------------
[detector]
# Strategy: "contour" or "scan".
# contour: adaptive binarization + contour extraction. Tolerates unevenly
#          lit margins and content that is not pure white.
# scan:    row/column scans inward from each edge. Only recognizes genuinely
#          uniform near-white margins; more conservative.
strategy = "contour"

# Adaptive threshold window side length in pixels (contour strategy).
# Must be odd and at least 3.
block_size = 11

# Constant subtracted from the local mean before thresholding (contour).
constant_c = 2

# A pixel counts as white when all three channels are >= this value (scan).
white_threshold = 250

# ---------------------------------------------------------------------------
# Crop policy
# ---------------------------------------------------------------------------
[policy]
# Narrowest border (in pixels) that justifies cropping and re-encoding.
# Images whose widest border is below this are skipped.
min_border_width = 5

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel image-processing workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
