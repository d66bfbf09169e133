//! Configuration loading
//!
//! `defaults/astdump.default.toml` is embedded into the crate so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`AstdumpConfig`].

use crate::ast::{DumpOptions, IndentMode};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use log::debug;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/astdump.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AstdumpConfig {
    pub dump: DumpConfig,
    pub output: OutputConfig,
}

/// Mirrors [`DumpOptions`]
#[derive(Debug, Clone, Deserialize)]
pub struct DumpConfig {
    #[serde(default)]
    pub indent: Option<IndentMode>,
    pub annotate_fields: bool,
    pub include_attributes: bool,
}

impl DumpConfig {
    pub fn to_options(&self) -> DumpOptions {
        DumpOptions::default()
            .with_indent(self.indent.clone())
            .annotate_fields(self.annotate_fields)
            .include_attributes(self.include_attributes)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Registry name of the format used when none is requested
    pub format: String,
}

/// Builds an [`AstdumpConfig`] from the embedded defaults plus layered sources.
///
/// Sources apply in the order they are added; later ones win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that has to exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Layer a TOML file only when it is present, e.g. `./astdump.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        debug!("layering config file {} (required: {required})", path.display());
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Spread dumps over several lines, `spaces` per nesting level.
    pub fn with_indent(self, spaces: u32) -> Result<Self, ConfigError> {
        self.set_override("dump.indent", spaces)
    }

    /// Append location attributes to every dumped node.
    pub fn with_attributes(self) -> Result<Self, ConfigError> {
        self.set_override("dump.include_attributes", true)
    }

    /// Registry name of the output format.
    pub fn with_format(self, name: &str) -> Result<Self, ConfigError> {
        self.set_override("output.format", name)
    }

    /// Set any key by its dotted path, e.g. `dump.annotate_fields`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<AstdumpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top
pub fn load_defaults() -> Result<AstdumpConfig, ConfigError> {
    Loader::new().build()
}
