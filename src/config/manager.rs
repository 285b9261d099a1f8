use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::completion;
use crate::paths;
use crate::translation::Language;

/// Default environment variable holding the completion API key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings in the `[dsc]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DscConfig {
    /// OpenAI-compatible API base URL.
    pub endpoint: Option<String>,
    /// Completion model identifier.
    pub model: Option<String>,
    /// Default display language (code from the language table).
    pub language: Option<String>,
    /// Environment variable containing the API key.
    pub api_key_env: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/dsc/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub dsc: DscConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Display language code override.
    pub to: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Model override.
    pub model: Option<String>,
}

/// Resolved configuration after merging CLI arguments, the config file and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for completion.
    pub model: String,
    /// The display language.
    pub language: Language,
    /// The environment variable the API key was read from.
    pub api_key_env: String,
    /// The API key, if the environment provides one.
    ///
    /// A missing key is not an error here; the completion service rejects
    /// unauthenticated calls on its own.
    pub api_key: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values; built-in defaults
/// (OpenRouter endpoint, DeepSeek model, English, `OPENAI_API_KEY`) fill in
/// the rest.
///
/// # Errors
///
/// Returns an error if the resolved language code is not in the language
/// table.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| config_file.dsc.endpoint.clone())
        .unwrap_or_else(|| completion::DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .clone()
        .or_else(|| config_file.dsc.model.clone())
        .unwrap_or_else(|| completion::DEFAULT_MODEL.to_string());

    let language_code = options
        .to
        .clone()
        .or_else(|| config_file.dsc.language.clone())
        .unwrap_or_else(|| Language::En.code().to_string());
    let language = Language::from_code(&language_code)
        .with_context(|| "Run 'dsc languages' to see supported codes")?;

    let api_key_env = config_file
        .dsc
        .api_key_env
        .clone()
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());

    let api_key = std::env::var(&api_key_env).ok().filter(|key| !key.is_empty());

    Ok(ResolvedConfig {
        endpoint,
        model,
        language,
        api_key_env,
        api_key,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/dsc/config.toml`
    /// or `~/.config/dsc/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
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

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
