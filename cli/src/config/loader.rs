//! Simple CLI configuration loader for faqbot
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./faqbot.json or ./.faqbot/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/faqbot/config.json or ~/.config/faqbot/config.json
//! 4. Environment variables only (no files)
//!
//! Environment variables fill whatever the file leaves unset; flags win over both.

use anyhow::{anyhow, Context, Result};
use faqbot_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use faqbot_core::{AgentConfig, ModelParams, ResolvedLlmConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Port the HTTP server binds when nothing else is configured
pub const DEFAULT_PORT: u16 = 8080;

/// FAQ document read when nothing else is configured
pub const DEFAULT_FAQ_DATA_PATH: &str = "data/faqs.json";

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// API key (can be "env:VAR_NAME" for environment variable)
    pub api_key: Option<String>,
    /// Base URL (optional, defaults to the public Gemini endpoint)
    pub base_url: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Model parameters (optional)
    #[serde(default)]
    pub params: ModelParams,
    /// Additional headers (optional)
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// HTTP port
    pub port: Option<u16>,
    /// Path to the FAQ JSON document
    pub faq_data_path: Option<PathBuf>,
    /// Per-turn wall-clock budget
    pub turn_timeout_secs: Option<u64>,
    /// Function-call round trips allowed per turn
    pub max_round_trips: Option<usize>,
    /// Replacement for the built-in assistant instruction
    pub system_prompt: Option<String>,
}

impl RawConfig {
    /// Keep every field already set, take the rest from `fallback`
    fn or(self, fallback: RawConfig) -> RawConfig {
        RawConfig {
            api_key: self.api_key.or(fallback.api_key),
            base_url: self.base_url.or(fallback.base_url),
            model: self.model.or(fallback.model),
            params: self.params,
            headers: self.headers,
            port: self.port.or(fallback.port),
            faq_data_path: self.faq_data_path.or(fallback.faq_data_path),
            turn_timeout_secs: self.turn_timeout_secs.or(fallback.turn_timeout_secs),
            max_round_trips: self.max_round_trips.or(fallback.max_round_trips),
            system_prompt: self.system_prompt.or(fallback.system_prompt),
        }
    }
}

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Environment => f.write_str("environment"),
        }
    }
}

/// Fully merged settings for the binary
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: ConfigSource,
    /// Resolved key; `None` is fine for commands that never call the model
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub params: ModelParams,
    pub headers: HashMap<String, String>,
    pub port: u16,
    pub faq_data_path: PathBuf,
    pub agent: AgentConfig,
}

impl Settings {
    /// Validated LLM configuration; fails when no API key is available
    pub fn llm_config(&self) -> Result<ResolvedLlmConfig> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            anyhow!(
                "No API key configured. Set GEMINI_API_KEY or add api_key to faqbot.json"
            )
        })?;

        let resolved = ResolvedLlmConfig::new(self.base_url.clone(), api_key, self.model.clone())
            .with_params(self.params.clone())
            .with_headers(self.headers.clone());

        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    api_key_override: Option<String>,
    base_url_override: Option<String>,
    model_override: Option<String>,
    port_override: Option<u16>,
    faq_data_override: Option<PathBuf>,
    /// Directory searched instead of the process working directory
    working_dir: Option<PathBuf>,
    /// Fixed environment instead of the process environment
    env: Option<HashMap<String, String>>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set API key override
    pub fn with_api_key_override(mut self, api_key: String) -> Self {
        self.api_key_override = Some(api_key);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set model override
    pub fn with_model_override(mut self, model: String) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Set port override
    pub fn with_port_override(mut self, port: u16) -> Self {
        self.port_override = Some(port);
        self
    }

    /// Set FAQ data path override
    pub fn with_faq_data_override(mut self, path: PathBuf) -> Self {
        self.faq_data_override = Some(path);
        self
    }

    /// Search `dir` instead of the current working directory
    #[cfg(test)]
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Read variables from `env` instead of the process environment
    #[cfg(test)]
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<Settings> {
        // Step 1: Find and load base configuration
        let found = if let Some(override_path) = &self.config_override {
            let (config, path) = self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?;
            Some((config, ConfigSource::File(path)))
        } else {
            self.search_and_load().await?
        };

        let (file_config, source) = match found {
            Some((config, source)) => (config, source),
            None => (RawConfig::default(), ConfigSource::Environment),
        };
        debug!(source = %source, "Configuration source");

        // Step 2: Fill gaps from the environment
        let mut config = file_config.or(self.env_config()?);

        // Step 3: Apply flag overrides
        if let Some(api_key) = &self.api_key_override {
            config.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }
        if let Some(model) = &self.model_override {
            config.model = Some(model.clone());
        }
        if let Some(port) = self.port_override {
            config.port = Some(port);
        }
        if let Some(path) = &self.faq_data_override {
            config.faq_data_path = Some(path.clone());
        }

        // Step 4: Resolve to final settings
        self.resolve(config, source)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<Option<(RawConfig, ConfigSource)>> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let mut candidates = vec![
            cwd.join("faqbot.json"),
            cwd.join(".faqbot").join("config.json"),
        ];
        if let Some(config_dir) = self.xdg_config_dir() {
            candidates.push(config_dir.join("faqbot").join("config.json"));
        }

        for path in candidates {
            if path.exists() {
                let config = self.load_file(&path).await?;
                return Ok(Some((config, ConfigSource::File(path))));
            }
        }

        Ok(None)
    }

    /// Configuration carried by environment variables
    fn env_config(&self) -> Result<RawConfig> {
        let port = match self.env_var("PORT") {
            Some(port) => Some(
                port.parse::<u16>()
                    .with_context(|| format!("Invalid PORT value: {}", port))?,
            ),
            None => None,
        };

        Ok(RawConfig {
            api_key: self
                .env_var("GEMINI_API_KEY")
                .or_else(|| self.env_var("GOOGLE_API_KEY")),
            base_url: self.env_var("GEMINI_BASE_URL"),
            model: self.env_var("GEMINI_MODEL"),
            port,
            faq_data_path: self.env_var("FAQ_DATA_PATH").map(PathBuf::from),
            ..Default::default()
        })
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<(RawConfig, PathBuf)> {
        if path.is_file() {
            Ok((self.load_file(path).await?, path.to_path_buf()))
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                Ok((self.load_file(&config_file).await?, config_file))
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn env_var(&self, name: &str) -> Option<String> {
        let value = match &self.env {
            Some(env) => env.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Get XDG config directory
    fn xdg_config_dir(&self) -> Option<PathBuf> {
        if let Some(xdg_config) = self.env_var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else if self.env.is_none() {
            dirs::config_dir()
        } else {
            None
        }
    }

    /// Resolve raw config to settings
    fn resolve(&self, config: RawConfig, source: ConfigSource) -> Result<Settings> {
        // Resolve API key (handle env: prefix)
        let api_key = match config.api_key {
            Some(key) => match key.strip_prefix("env:") {
                Some(var_name) => Some(self.env_var(var_name).ok_or_else(|| {
                    anyhow!("Environment variable not found: {}", var_name)
                })?),
                None => Some(key),
            },
            None => None,
        };

        let defaults = AgentConfig::default();
        let turn_timeout_ms = match config.turn_timeout_secs {
            Some(0) => return Err(anyhow!("turn_timeout_secs must be greater than zero")),
            Some(secs) => secs
                .checked_mul(1000)
                .ok_or_else(|| anyhow!("turn_timeout_secs is too large: {}", secs))?,
            None => defaults.turn_timeout_ms,
        };
        let max_round_trips = match config.max_round_trips {
            Some(0) => return Err(anyhow!("max_round_trips must be greater than zero")),
            Some(n) => n,
            None => defaults.max_round_trips,
        };

        Ok(Settings {
            source,
            api_key,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            params: config.params,
            headers: config.headers,
            port: config.port.unwrap_or(DEFAULT_PORT),
            faq_data_path: config
                .faq_data_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FAQ_DATA_PATH)),
            agent: AgentConfig {
                max_round_trips,
                turn_timeout_ms,
                system_prompt: config.system_prompt,
            },
        })
    }
}
