//! Shared configuration loader for clex.
//!
//! `defaults/clex.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Applications layer user files and flag overrides on top via
//! [`Loader`] before deserializing into [`ClexConfig`].

use clex::clex::analysis::AnalyzerOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/clex.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "clex.toml";

/// Top-level configuration consumed by the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct ClexConfig {
    pub lexer: AnalyzerOptions,
    pub io: IoConfig,
    pub report: ReportConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Name of a registered report format.
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    pub echo: bool,
    pub clear_screen: bool,
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ClexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ClexConfig, ConfigError> {
    Loader::new().build()
}
