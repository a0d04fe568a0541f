//! Configuration for the textmorse tools
//!
//! Settings resolve in three layers, later ones winning:
//!
//!     1. `defaults/textmorse.default.toml`, compiled in.
//!     2. A TOML file, usually from `--config`.
//!     3. Single keys set from command-line flags.
//!
//! [`Loader`] stacks the layers and [`Loader::build`] produces a [`TextmorseConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use textmorse::morse::{PlaybackError, PlaybackSettings};
use textmorse::TokenizerConfig;

const DEFAULT_TOML: &str = include_str!("../defaults/textmorse.default.toml");

/// Resolved `[tokenizer]` and `[playback]` tables
#[derive(Debug, Clone, Deserialize)]
pub struct TextmorseConfig {
    pub tokenizer: TokenizerSettings,
    pub playback: PlaybackConfig,
}

/// Mirrors [`TokenizerConfig`]; character sets are written as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerSettings {
    pub delimiters: String,
    pub qualifiers: String,
    pub escapes: String,
    pub line_join: String,
    pub double_qualifier_escape: bool,
    pub span: bool,
    pub group_lines: bool,
    pub ignore_consecutive_delimiters: bool,
}

impl TokenizerSettings {
    pub fn to_tokenizer_config(&self) -> TokenizerConfig {
        let mut config = TokenizerConfig::new()
            .with_delimiters(self.delimiters.chars())
            .with_qualifiers(self.qualifiers.chars())
            .with_escapes(self.escapes.chars())
            .with_line_join(self.line_join.clone());
        config.double_qualifier_escape = self.double_qualifier_escape;
        config.span = self.span;
        config.group_lines = self.group_lines;
        config.ignore_consecutive_delimiters = self.ignore_consecutive_delimiters;
        config
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackConfig {
    pub unit_ms: u64,
    pub frequency_hz: u32,
}

impl PlaybackConfig {
    /// Range checks happen here, not at load time
    pub fn to_settings(&self) -> Result<PlaybackSettings, PlaybackError> {
        PlaybackSettings::new(self.unit_ms, self.frequency_hz)
    }
}

/// Stacks configuration layers on top of the compiled-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the defaults layer
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file layer; `build` fails if the file is missing
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), true)
    }

    /// Add a TOML file layer that is skipped when the file does not exist
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), false)
    }

    fn add_toml(self, path: &Path, required: bool) -> Self {
        let layer = File::from(path).format(FileFormat::Toml).required(required);
        Self {
            builder: self.builder.add_source(layer),
        }
    }

    /// Set one dotted key such as `playback.unit_ms`, above every file layer
    pub fn set_override(self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        Ok(Self {
            builder: self.builder.set_override(key, value)?,
        })
    }

    /// Merge the layers into a [`TextmorseConfig`]
    pub fn build(self) -> Result<TextmorseConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in defaults with nothing layered on top
pub fn load_defaults() -> Result<TextmorseConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.tokenizer.delimiters, " ");
        assert_eq!(config.tokenizer.qualifiers, "\"");
        assert!(config.tokenizer.double_qualifier_escape);
        assert_eq!(config.playback.unit_ms, 100);
        assert_eq!(config.playback.frequency_hz, 800);
    }

    #[test]
    fn defaults_match_tokenizer_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(
            config.tokenizer.to_tokenizer_config(),
            TokenizerConfig::default()
        );
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("tokenizer.delimiters", ",;")
            .expect("override to apply")
            .set_override("tokenizer.span", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        let tokenizer = config.tokenizer.to_tokenizer_config();
        assert_eq!(tokenizer.delimiters.len(), 2);
        assert!(tokenizer.span);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[playback]\nunit_ms = 60").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.playback.unit_ms, 60);
        assert_eq!(config.playback.frequency_hz, 800);
        assert!(config.playback.to_settings().is_ok());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/no/such/textmorse.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.playback.unit_ms, 100);
    }

    #[test]
    fn out_of_range_playback_is_rejected_on_use() {
        let config = Loader::new()
            .set_override("playback.unit_ms", 5)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(
            config.playback.to_settings(),
            Err(PlaybackError::UnitOutOfRange(5))
        );
    }
}
