//! Runtime configuration, loaded from TOML with environment overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CafeConfig {
    pub reasoning: ReasoningConfig,
    pub speech: SpeechConfig,
    pub store: StoreConfig,
    pub session: SessionConfig,
}

/// Chat model endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasoningConfig {
    /// Base URL including the version segment.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Upper bound for one reply or one extraction, tool rounds included.
    pub timeout_secs: u64,
    pub max_tool_rounds: usize,
    pub temperature: Option<f32>,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            timeout_secs: 30,
            max_tool_rounds: 3,
            temperature: None,
        }
    }
}

/// Text-to-speech endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub base_url: String,
    pub api_key: Option<String>,
    pub voice_id: String,
    pub model_id: String,
    /// Sample rate requested from the service and written to the WAV header.
    pub sample_rate: u32,
    pub output_dir: PathBuf,
    pub timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.cartesia.ai".to_string(),
            api_key: None,
            voice_id: "694f9389-aac1-45b6-b726-9d9369183238".to_string(),
            model_id: "sonic-english".to_string(),
            sample_rate: 44_100,
            output_dir: PathBuf::from("static"),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Where finalized orders are mirrored. `None` keeps the ledger in memory only.
    pub orders_csv: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            orders_csv: Some(PathBuf::from("uploads/orders.csv")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Channel capacity of each actor.
    pub buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { buffer: 32 }
    }
}

impl CafeConfig {
    /// Parse a TOML document; missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.buffer == 0 {
            return Err(ConfigError::Parse("session.buffer must be at least 1".into()));
        }
        if self.reasoning.timeout_secs == 0 {
            return Err(ConfigError::Parse("reasoning.timeout_secs must be at least 1".into()));
        }
        if self.speech.timeout_secs == 0 {
            return Err(ConfigError::Parse("speech.timeout_secs must be at least 1".into()));
        }
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Read `path` (or the default location), then apply environment overrides.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_config_path);
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_MODEL_NAME` and `CARTESIA_API_KEY`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.reasoning.api_key = Some(key);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.reasoning.base_url = url;
        }
        if let Some(model) = lookup("OPENAI_MODEL_NAME") {
            self.reasoning.model = model;
        }
        if let Some(key) = lookup("CARTESIA_API_KEY") {
            self.speech.api_key = Some(key);
        }
    }

    /// `$XDG_CONFIG_HOME/cafe-assistant/config.toml` or the platform equivalent.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cafe-assistant").join("config.toml"))
    }
}
