//! Configuration types for Dayspan checks.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`ReportConfig`] - Controls how warnings are treated and shown.
//!
//! # Example
//!
//! ```
//! # use dayspan::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.report().show_warnings());
//! assert!(!config.report().deny_warnings());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given report configuration.
    pub fn new(report: ReportConfig) -> Self {
        Self { report }
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Controls how warnings are treated and shown.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Whether warnings are shown to the user.
    #[serde(default = "default_show_warnings")]
    show_warnings: bool,

    /// Whether any warning fails the check like an error does.
    #[serde(default)]
    deny_warnings: bool,
}

fn default_show_warnings() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_warnings: default_show_warnings(),
            deny_warnings: false,
        }
    }
}

impl ReportConfig {
    /// Creates a new [`ReportConfig`].
    ///
    /// # Arguments
    ///
    /// * `show_warnings` - Show warnings to the user.
    /// * `deny_warnings` - Fail the check when any warning is present.
    pub fn new(show_warnings: bool, deny_warnings: bool) -> Self {
        Self {
            show_warnings,
            deny_warnings,
        }
    }

    /// Returns `true` if warnings should be shown.
    pub fn show_warnings(&self) -> bool {
        self.show_warnings
    }

    /// Returns `true` if warnings fail the check.
    pub fn deny_warnings(&self) -> bool {
        self.deny_warnings
    }
}
