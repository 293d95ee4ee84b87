// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Builder pattern for creating simulation readers.
//!
//! The `ReaderBuilder` provides a fluent API for configuring and creating
//! readers with specific decode limits.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::io::formats::exposures::FooterLimits;
use crate::{Result, SimError};

/// Configuration for creating a reader.
///
/// Deserializes from TOML with every field optional:
///
/// ```toml
/// path = "run.exposures"
/// max_string_len = 65536
/// max_catalog_len = 100000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Path to the file to read
    pub path: PathBuf,
    /// Decode limits
    #[serde(flatten)]
    pub limits: FooterLimits,
}

impl ReaderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SimError::config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SimError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}

/// Builder for creating simulation readers.
///
/// # Example
///
/// ```rust,no_run
/// use esme::io::ReaderBuilder;
///
/// let reader = ReaderBuilder::new()
///     .path("run.exposures")
///     .max_string_len(4096)
///     .build()?;
/// let footer = reader.read_footer()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReaderBuilder {
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Set the path to the file.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.path = path.as_ref().to_path_buf();
        self
    }

    /// Set the largest accepted string length.
    pub fn max_string_len(mut self, len: usize) -> Self {
        self.config.limits.max_string_len = len;
        self
    }

    /// Set the largest accepted catalog count.
    pub fn max_catalog_len(mut self, len: usize) -> Self {
        self.config.limits.max_catalog_len = len;
        self
    }

    /// Build the reader.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is not set
    /// - The file doesn't exist
    pub fn build(self) -> Result<super::SimulationReader> {
        let path = &self.config.path;

        if path.as_os_str().is_empty() {
            return Err(SimError::config("Path is not set"));
        }

        if !path.exists() {
            return Err(SimError::source_not_found(path));
        }

        Ok(super::SimulationReader {
            config: self.config,
        })
    }
}
