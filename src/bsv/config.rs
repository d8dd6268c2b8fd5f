//! Configuration loader for bsvdoc.
//!
//! `defaults/bsvdoc.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer a user file and command-line
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`BsvDocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::bsv::formats::OutputFormat;

const DEFAULT_TOML: &str = include_str!("../../defaults/bsvdoc.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BsvDocConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Knobs for the Markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    pub code_language: String,
    pub link_prefix: String,
    pub package_heading_level: usize,
    pub plain_heading_level: usize,
    pub parameterized_heading_level: usize,
}

impl RenderConfig {
    /// Heading depth for a declaration
    pub fn heading_level(&self, is_package: bool, has_parameters: bool) -> usize {
        if is_package {
            self.package_heading_level
        } else if has_parameters {
            self.parameterized_heading_level
        } else {
            self.plain_heading_level
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            code_language: "bluespec".to_string(),
            link_prefix: String::new(),
            package_heading_level: 1,
            plain_heading_level: 2,
            parameterized_heading_level: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BsvDocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BsvDocConfig, ConfigError> {
    Loader::new().build()
}
