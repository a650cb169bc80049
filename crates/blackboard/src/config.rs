// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tag table configuration.
//!
//! - **Static**: crate-wide constants (default and maximum capacity hints)
//! - **Per table**: [`TagTableConfig`], built programmatically or, with the
//!   `config-file` feature, loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use blackboard::{TagTable, TagTableConfig};
//!
//! let config = TagTableConfig::default()
//!     .with_initial_capacity(64)
//!     .with_log_type_mismatches(true);
//! let table = TagTable::with_config(config);
//! assert!(table.capacity() >= 64);
//! ```

#[cfg(feature = "config-file")]
use serde::Deserialize;
#[cfg(feature = "config-file")]
use std::path::Path;
use thiserror::Error;

/// Capacity hint used when none is given (the map allocates lazily).
pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

/// Largest accepted capacity hint.
///
/// Tables hold per-tick state for a single owner; a hint above this is a
/// configuration mistake rather than a real workload. `validate` rejects it
/// and `TagTable::with_config` clamps it.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "config-file")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config-file")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Per-table settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-file", derive(Deserialize))]
#[cfg_attr(feature = "config-file", serde(default, deny_unknown_fields))]
pub struct TagTableConfig {
    /// Number of entries to reserve up front.
    pub initial_capacity: usize,

    /// Emit a debug log line whenever a typed read finds the tag under a
    /// different kind.
    pub log_type_mismatches: bool,
}

impl Default for TagTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            log_type_mismatches: false,
        }
    }
}

impl TagTableConfig {
    /// Set the capacity hint.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enable or disable mismatch logging.
    #[must_use]
    pub fn with_log_type_mismatches(mut self, enabled: bool) -> Self {
        self.log_type_mismatches = enabled;
        self
    }

    /// Check limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[cfg(feature = "config-file")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TagTableConfig::default();
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert!(!config.log_type_mismatches);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = TagTableConfig::default()
            .with_initial_capacity(32)
            .with_log_type_mismatches(true);
        assert_eq!(config.initial_capacity, 32);
        assert!(config.log_type_mismatches);
    }

    #[test]
    fn test_validate_rejects_huge_capacity() {
        let config = TagTableConfig::default().with_initial_capacity(MAX_INITIAL_CAPACITY + 1);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("initial_capacity"));
    }

    #[cfg(not(feature = "config-file"))]
    #[test]
    fn test_config_error_without_loader_is_validation_only() {
        let err = TagTableConfig::default()
            .with_initial_capacity(usize::MAX)
            .validate()
            .unwrap_err();
        // Exhaustive: no I/O or TOML variants exist without the loader
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("maximum")),
        }
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_from_toml_str() {
        let config = TagTableConfig::from_toml_str(
            "initial_capacity = 128\nlog_type_mismatches = true\n",
        )
        .expect("parse");
        assert_eq!(config.initial_capacity, 128);
        assert!(config.log_type_mismatches);

        // Missing keys fall back to defaults
        let config = TagTableConfig::from_toml_str("").expect("parse empty");
        assert_eq!(config, TagTableConfig::default());
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_from_toml_str_errors() {
        assert!(matches!(
            TagTableConfig::from_toml_str("initial_capacity = \"many\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            TagTableConfig::from_toml_str("unknown_key = 1"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            TagTableConfig::from_toml_str("initial_capacity = 99999999"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_from_missing_file() {
        let err = TagTableConfig::from_file("/nonexistent/blackboard.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
