//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quizcycle/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::questions::ShufflePolicy;
use crate::core::rotator::DEFAULT_PERIOD_SECS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// File path or `http(s)://` URL of the question JSON.
    pub source: Option<String>,
    pub period_secs: Option<u32>,
    pub shuffle: Option<bool>,
    pub seed: Option<u64>,
}

/// Values taken from command-line flags. `None`/`false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub source: Option<String>,
    pub period_secs: Option<u32>,
    pub no_shuffle: bool,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SOURCE: &str = "questions.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: String,
    pub period_secs: u32,
    pub shuffle: ShufflePolicy,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quizcycle/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quizcycle").join("config.toml"))
}

/// Load config from `~/.quizcycle/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuizConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Quizcycle Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# source = "questions.json"          # Path or http(s) URL. Or set QUIZCYCLE_SOURCE
# period_secs = 180                  # Seconds per question. Or set QUIZCYCLE_PERIOD
# shuffle = true                     # Randomize order once at load
# seed = 42                          # Fixed shuffle seed for a repeatable order
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuizConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &QuizConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Source: CLI → env → config → default
    let source = cli
        .source
        .clone()
        .or_else(|| env("QUIZCYCLE_SOURCE"))
        .or_else(|| config.general.source.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    // Period: CLI → env → config → default. Unparseable env values are skipped.
    let period_secs = cli
        .period_secs
        .or_else(|| {
            env("QUIZCYCLE_PERIOD").and_then(|v| match v.trim().parse() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    warn!("Ignoring invalid QUIZCYCLE_PERIOD: {:?}", v);
                    None
                }
            })
        })
        .or(config.general.period_secs)
        .unwrap_or(DEFAULT_PERIOD_SECS)
        .max(1);

    let shuffle_enabled = !cli.no_shuffle && config.general.shuffle.unwrap_or(true);
    let shuffle = if shuffle_enabled {
        ShufflePolicy::Shuffle {
            seed: cli.seed.or(config.general.seed),
        }
    } else {
        ShufflePolicy::Preserve
    };

    ResolvedConfig {
        source,
        period_secs,
        shuffle,
    }
}
