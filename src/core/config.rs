//! Aggregation configuration
//!
//! The knobs here decide how the property engine treats edge cases that the
//! raw arithmetic leaves undefined.

use serde::{Deserialize, Serialize};

use crate::core::error::{AnatomyError, Result};

/// How a part whose wounds exceed its hit points is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverDamagePolicy {
    /// Remaining hit points saturate at zero, so an over-damaged part has
    /// efficiency 0 and never produces NaN. Relies on importance and
    /// efficiency base being non-negative, which construction enforces.
    #[default]
    Clamp,
    /// Raw arithmetic. Negative efficiency raised to a fractional
    /// importance yields NaN, which poisons the whole product.
    Propagate,
}

/// Configuration for the property aggregation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnatomyConfig {
    /// Over-damage handling in `property()`
    #[serde(default)]
    pub over_damage: OverDamagePolicy,

    /// Innate capacity given to each part of a freshly created body
    ///
    /// 1.0 means an unwounded body sits exactly at its template's base
    /// property values.
    #[serde(default = "default_efficiency_base")]
    pub default_efficiency_base: f64,
}

fn default_efficiency_base() -> f64 {
    1.0
}

impl Default for AnatomyConfig {
    fn default() -> Self {
        Self {
            over_damage: OverDamagePolicy::Clamp,
            default_efficiency_base: default_efficiency_base(),
        }
    }
}

impl AnatomyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_over_damage(mut self, policy: OverDamagePolicy) -> Self {
        self.over_damage = policy;
        self
    }

    /// Parse a config from TOML, validating the result
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AnatomyConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.default_efficiency_base.is_finite() || self.default_efficiency_base < 0.0 {
            return Err(AnatomyError::InvalidConfig(format!(
                "default_efficiency_base ({}) must be finite and >= 0",
                self.default_efficiency_base
            )));
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<AnatomyConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static AnatomyConfig {
    CONFIG.get_or_init(AnatomyConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set or fails validation.
pub fn set_config(config: AnatomyConfig) -> std::result::Result<(), AnatomyConfig> {
    if config.validate().is_err() {
        return Err(config);
    }
    CONFIG.set(config)
}
