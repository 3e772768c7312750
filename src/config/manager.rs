use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::translation::{
    AUTO_DETECT, DEFAULT_CHUNK_DELAY, DEFAULT_ENDPOINT, DEFAULT_MAX_CHUNK_CHARS, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT, normalize_language, normalize_source_language,
};

/// Default settings in the `[gtrans]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtransConfig {
    /// Default source language code (`auto` to let the backend detect it).
    pub from: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
    /// Character budget per request.
    pub max_chunk_chars: Option<usize>,
    /// Pause between requests, in milliseconds.
    pub chunk_delay_ms: Option<u64>,
}

/// Backend settings in the `[backend]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the translation backend.
    pub endpoint: Option<String>,
    /// `User-Agent` header sent with every request.
    pub user_agent: Option<String>,
    /// Per-request timeout, in seconds.
    pub timeout_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtrans/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtrans: GtransConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source_language: String,
    pub target_language: String,
    pub max_chunk_chars: usize,
    pub chunk_delay: Duration,
    pub endpoint: String,
    pub user_agent: String,
    pub timeout: Duration,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language code override.
    pub from: Option<String>,
    /// Target language code override.
    pub to: Option<String>,
    /// Chunk budget override.
    pub max_chunk_chars: Option<usize>,
    /// Inter-chunk delay override, in milliseconds.
    pub chunk_delay_ms: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the target language is missing, a language code is
/// not supported, or the chunk budget is zero.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let defaults = &config_file.gtrans;
    let backend = &config_file.backend;

    let source_language = options
        .from
        .as_deref()
        .or(defaults.from.as_deref())
        .unwrap_or(AUTO_DETECT);
    let source_language = normalize_source_language(source_language)?.to_string();

    let target_language = options
        .to
        .as_deref()
        .or(defaults.to.as_deref())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: gtrans --to <lang>\n  \
                 - Config file: Run 'gtrans configure' to set up configuration"
            )
        })?;
    let target_language = normalize_language(target_language)?.to_string();

    let max_chunk_chars = options
        .max_chunk_chars
        .or(defaults.max_chunk_chars)
        .unwrap_or(DEFAULT_MAX_CHUNK_CHARS);
    if max_chunk_chars == 0 {
        bail!("Invalid configuration: 'max_chunk_chars' must be greater than 0");
    }

    let chunk_delay = options
        .chunk_delay_ms
        .or(defaults.chunk_delay_ms)
        .map_or(DEFAULT_CHUNK_DELAY, Duration::from_millis);

    Ok(ResolvedConfig {
        source_language,
        target_language,
        max_chunk_chars,
        chunk_delay,
        endpoint: backend
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        user_agent: backend
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        timeout: backend
            .timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/gtrans/config.toml`
    /// or `~/.config/gtrans/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
