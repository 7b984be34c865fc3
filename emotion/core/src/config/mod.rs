//! Startup Settings for an Emotion Manager
//!
//! Two things can be configured: which strategy a fresh manager runs and
//! which emotion it shows before the first facet arrives. Everything else is
//! decided at runtime by the caller.
//!
//! # Where values come from
//!
//! Each setting is taken from the first layer that provides it:
//! 1. command-line flags, applied with [`ConfigOverrides`]
//! 2. `EMOTIONKIT_STRATEGY` / `EMOTIONKIT_INITIAL_EMOTION`
//! 3. `emotion.toml` under the user config directory (see [`default_config_path`])
//! 4. the `default` strategy showing NEUTRAL
//!
//! A missing `emotion.toml` simply skips that layer. A file that does not
//! parse, or a strategy or emotion key nobody knows, is an error rather than
//! a silent fallback.
//!
//! ```toml
//! [strategy]
//! default = "conservative"
//!
//! [emotion]
//! initial = "neutral"
//! ```
//!
//! Strategy keys are matched exactly (`"conservative"`, not
//! `"Conservative"`); emotion keys accept any case.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emotion::EmotionType;
use crate::strategy::StrategyKind;

/// Environment variable selecting the strategy
pub const ENV_STRATEGY: &str = "EMOTIONKIT_STRATEGY";

/// Environment variable selecting the initial emotion
pub const ENV_INITIAL_EMOTION: &str = "EMOTIONKIT_INITIAL_EMOTION";

// =============================================================================
// Errors
// =============================================================================

/// Why the startup settings could not be resolved
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `emotion.toml` exists but could not be read
    #[error("cannot read emotion settings from {path}: {source}")]
    ReadError {
        /// File that was opened
        path: PathBuf,
        /// I/O failure
        source: std::io::Error,
    },

    /// `emotion.toml` is not valid TOML for this layout
    #[error("emotion settings file is malformed: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A strategy or emotion key that is not recognised
    #[error("bad emotion setting, {0}")]
    ValidationError(String),
}

// =============================================================================
// Layers
// =============================================================================

/// Highest layer that contributed a setting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// `--strategy` and friends
    Cli,
    /// `EMOTIONKIT_*` variables
    Env,
    /// `emotion.toml`
    File,
    /// Nothing set anywhere
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cli => "command line",
            Self::Env => "EMOTIONKIT_* variables",
            Self::File => "emotion.toml",
            Self::Default => "built-in defaults",
        })
    }
}

// =============================================================================
// emotion.toml Layout
// =============================================================================

/// `[strategy]` table
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyToml {
    /// Strategy key to start with
    pub default: Option<String>,
}

/// `[emotion]` table
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionToml {
    /// Emotion shown before the first update
    pub initial: Option<String>,
}

/// Whole `emotion.toml`; every table may be absent
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionKitToml {
    /// Strategy section
    pub strategy: StrategyToml,

    /// Emotion section
    pub emotion: EmotionToml,
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// What a new [`EmotionStrategyManager`](crate::EmotionStrategyManager) starts with
#[derive(Clone, Debug, PartialEq)]
pub struct EmotionConfig {
    /// Strategy to start with
    pub strategy: StrategyKind,

    /// Emotion shown before the first update
    pub initial_emotion: EmotionType,

    /// `emotion.toml` that was read, if one was found
    pub config_file_path: Option<PathBuf>,

    /// Highest-priority layer that set a value
    source: ConfigSource,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Default,
            initial_emotion: EmotionType::Neutral,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl EmotionConfig {
    /// `default` strategy showing NEUTRAL
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest layer that set anything
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

// =============================================================================
// Loading
// =============================================================================

/// `emotionkit/emotion.toml` inside the platform config directory
///
/// `None` when the platform has no config directory (no `$HOME`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("emotionkit").join("emotion.toml"))
}

/// Resolve settings from the usual `emotion.toml` and the process environment
///
/// # Errors
///
/// See [`load_config_with_env`].
pub fn load_config() -> Result<EmotionConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Resolve settings from `path` (if given) and the process environment
///
/// # Errors
///
/// See [`load_config_with_env`].
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<EmotionConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Resolve settings from `path` and an injected environment lookup
///
/// `env` maps a variable name to its value. Tests pass a closure here instead
/// of touching the real process environment.
///
/// # Errors
///
/// [`ConfigError::ReadError`] or [`ConfigError::ParseError`] for an
/// unreadable or malformed file, [`ConfigError::ValidationError`] for an
/// unknown strategy or emotion key in the file or the environment. A path
/// that does not exist is skipped.
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<EmotionConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EmotionConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: EmotionKitToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config)?;
            config.config_file_path = Some(config_path.clone());

            tracing::info!(
                path = %config_path.display(),
                strategy = %config.strategy,
                initial = %config.initial_emotion,
                "Read emotion settings"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "No emotion settings file"
            );
        }
    }

    apply_env_config(&mut config, env)?;

    Ok(config)
}

fn parse_strategy(value: &str, origin: &str) -> Result<StrategyKind, ConfigError> {
    StrategyKind::from_key(value).map_err(|e| ConfigError::ValidationError(format!("{origin}: {e}")))
}

fn parse_emotion(value: &str, origin: &str) -> Result<EmotionType, ConfigError> {
    value
        .parse()
        .map_err(|e| ConfigError::ValidationError(format!("{origin}: {e}")))
}

/// Layer the file's tables over the defaults
fn apply_toml_config(config: &mut EmotionConfig, toml: &EmotionKitToml) -> Result<(), ConfigError> {
    if let Some(ref key) = toml.strategy.default {
        config.strategy = parse_strategy(key, "[strategy] default")?;
        config.source = ConfigSource::File;
    }
    if let Some(ref emotion) = toml.emotion.initial {
        config.initial_emotion = parse_emotion(emotion, "[emotion] initial")?;
        config.source = ConfigSource::File;
    }
    Ok(())
}

/// Layer `EMOTIONKIT_*` over whatever the file set
fn apply_env_config<F>(config: &mut EmotionConfig, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = env(ENV_STRATEGY) {
        config.strategy = parse_strategy(&key, ENV_STRATEGY)?;
        config.source = ConfigSource::Env;
    }
    if let Some(emotion) = env(ENV_INITIAL_EMOTION) {
        config.initial_emotion = parse_emotion(&emotion, ENV_INITIAL_EMOTION)?;
        config.source = ConfigSource::Env;
    }
    Ok(())
}

// =============================================================================
// Command-Line Layer
// =============================================================================

/// Values given on the command line, applied last
///
/// Load the lower layers first ([`load_config`] and friends), then
/// [`apply`](Self::apply) these on top.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Strategy override
    pub strategy: Option<StrategyKind>,

    /// Initial emotion override
    pub initial_emotion: Option<EmotionType>,
}

impl ConfigOverrides {
    /// Nothing overridden
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Force the initial emotion
    #[must_use]
    pub fn with_initial_emotion(mut self, emotion: EmotionType) -> Self {
        self.initial_emotion = Some(emotion);
        self
    }

    /// Overwrite whatever `config` holds for each value set here
    pub fn apply(&self, config: &mut EmotionConfig) {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
            config.source = ConfigSource::Cli;
        }
        if let Some(emotion) = self.initial_emotion {
            config.initial_emotion = emotion;
            config.source = ConfigSource::Cli;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
