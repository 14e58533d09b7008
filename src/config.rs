//! Configuration loading and management
//!
//! Handles parsing of `hemma.toml` configuration files. Every timing contract
//! of the engine (toast display window, deadline scan cadence, the simulated
//! assignment ping, the imminent-deadline horizon) is a configurable value
//! here rather than a literal at the call site.

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Toast presentation configuration
    #[serde(default)]
    pub toasts: ToastConfig,

    /// Alert timer configuration
    #[serde(default)]
    pub alerts: AlertConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            toasts: ToastConfig::default(),
            alerts: AlertConfig::default(),
        }
    }
}

/// Toast-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays on screen before auto-dismissal, in milliseconds
    #[serde(default = "default_display_ms")]
    pub display_ms: i64,
}

fn default_display_ms() -> i64 {
    5_000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

/// Alert-timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Interval between deadline scans, in milliseconds
    #[serde(default = "default_scan_interval_ms")]
    pub scan_interval_ms: i64,

    /// Delay before the one-shot external-assignment ping, in milliseconds
    #[serde(default = "default_assignment_ping_ms")]
    pub assignment_ping_ms: i64,

    /// Horizon for "imminent" deadlines, in hours
    #[serde(default = "default_deadline_window_hours")]
    pub deadline_window_hours: i64,
}

fn default_scan_interval_ms() -> i64 {
    120_000
}

fn default_assignment_ping_ms() -> i64 {
    15_000
}

fn default_deadline_window_hours() -> i64 {
    24
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            scan_interval_ms: default_scan_interval_ms(),
            assignment_ping_ms: default_assignment_ping_ms(),
            deadline_window_hours: default_deadline_window_hours(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.toasts.display_ms <= 0 {
            return Err(Error::InvalidConfig(
                "toasts.display_ms must be positive".to_string(),
            ));
        }
        if self.alerts.scan_interval_ms <= 0 {
            return Err(Error::InvalidConfig(
                "alerts.scan_interval_ms must be positive".to_string(),
            ));
        }
        if self.alerts.assignment_ping_ms <= 0 {
            return Err(Error::InvalidConfig(
                "alerts.assignment_ping_ms must be positive".to_string(),
            ));
        }
        if self.alerts.deadline_window_hours <= 0 {
            return Err(Error::InvalidConfig(
                "alerts.deadline_window_hours must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Toast display window as a duration.
    pub fn toast_window(&self) -> Duration {
        Duration::milliseconds(self.toasts.display_ms)
    }

    /// Deadline scan interval as a duration.
    pub fn scan_interval(&self) -> Duration {
        Duration::milliseconds(self.alerts.scan_interval_ms)
    }

    /// Assignment ping delay as a duration.
    pub fn assignment_ping_delay(&self) -> Duration {
        Duration::milliseconds(self.alerts.assignment_ping_ms)
    }

    /// Imminent-deadline horizon as a duration.
    pub fn deadline_window(&self) -> Duration {
        Duration::hours(self.alerts.deadline_window_hours)
    }
}
