//! Configuration loader
//!
//! `defaults/maap-inp.default.toml` is embedded into the crate so that the documented
//! defaults and runtime behavior stay in sync. Callers layer user files and single-key
//! overrides on top with [`Loader`] before deserializing into [`InpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::inp::formats::{FormatRegistry, TreevizFormatter};
use crate::inp::options::ParserOptions;

const DEFAULT_TOML: &str = include_str!("../../defaults/maap-inp.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InpConfig {
    pub parser: ParserOptions,
    pub output: OutputConfig,
}

/// How the CLI renders a parsed program
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format
    pub format: String,
    pub pretty: bool,
    pub show_line_numbers: bool,
}

impl OutputConfig {
    /// A registry whose built-in formats follow these settings
    pub fn registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::with_defaults(self.pretty);
        registry.register(TreevizFormatter {
            show_linum: self.show_line_numbers,
        });
        registry
    }
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

    /// Apply a single key/value override, e.g. from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<InpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<InpConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser, ParserOptions::default());
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty);
        assert!(!config.output.show_line_numbers);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.safe_mode", false)
            .expect("override to apply")
            .set_override("parser.max_recoveries", 5i64)
            .expect("override to apply")
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.parser.safe_mode);
        assert_eq!(config.parser.max_recoveries, Some(5));
        assert_eq!(config.output.format, "treeviz");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/nonexistent/maap-inp.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn optional_file_may_be_absent() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/maap-inp.toml")
            .build()
            .expect("config to build");
        assert!(config.parser.emit_location);
    }

    #[test]
    fn registry_follows_output_settings() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.output.registry().has(&config.output.format));
    }
}
