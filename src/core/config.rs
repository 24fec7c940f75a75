//! Application configuration with documented defaults
//!
//! Every timing and size constant the views use lives here. The config can
//! be loaded from a TOML file; any field left out keeps its default.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::core::error::{GhxError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub scanner: ScannerConfig,
    pub injector: InjectorConfig,
    pub timing: TimingConfig,
}

/// Native window settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels
    pub width: u32,
    /// Initial inner height in logical pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "GH-X PRO".into(),
            width: 1280,
            height: 800,
        }
    }
}

/// Scanner view settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// How long a scan "runs" before results appear
    pub delay_ms: u64,
    /// Fewest results a scan produces (inclusive)
    pub min_results: u32,
    /// Most results a scan produces (inclusive)
    pub max_results: u32,
    /// Upper bound (exclusive) for values invented when the search is not a number
    pub random_value_max: i64,
    /// How long "Value modified in memory!" stays visible after a save
    pub save_flash_ms: u64,
    /// Fixed seed for result generation. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            min_results: 5,
            max_results: 14,
            random_value_max: 10_000,
            save_flash_ms: 2000,
            seed: None,
        }
    }
}

/// Currency-injector view settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Prefilled amount input
    pub default_amount: String,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            default_amount: "10000".into(),
        }
    }
}

/// Largest accepted `timing.time_scale`
pub const MAX_TIME_SCALE: f32 = 100.0;

/// Global pacing of scripted delays
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Multiplier applied to every scripted delay. `0.0` makes sequences instant.
    pub time_scale: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl TimingConfig {
    /// Apply the time scale to a nominal delay in milliseconds
    ///
    /// Saturates to `Duration::MAX` when the product does not fit, and treats
    /// negative or NaN scales as `0.0`.
    pub fn scaled(&self, millis: u64) -> Duration {
        let secs = millis as f64 / 1000.0 * self.time_scale.max(0.0) as f64;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl AppConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate().map_err(GhxError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.scanner.min_results == 0 {
            return Err("scanner.min_results must be at least 1".into());
        }

        if self.scanner.min_results > self.scanner.max_results {
            return Err(format!(
                "scanner.min_results ({}) should be <= scanner.max_results ({})",
                self.scanner.min_results, self.scanner.max_results
            ));
        }

        if self.scanner.random_value_max <= 0 {
            return Err("scanner.random_value_max must be positive".into());
        }

        let scale = self.timing.time_scale;
        if !scale.is_finite() || !(0.0..=MAX_TIME_SCALE).contains(&scale) {
            return Err(format!(
                "timing.time_scale ({scale}) must be between 0 and {MAX_TIME_SCALE}"
            ));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err("window size must be non-zero".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global app config (initializes with defaults if not set)
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// Set the global app config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: AppConfig) -> std::result::Result<(), AppConfig> {
    CONFIG.set(config)
}
