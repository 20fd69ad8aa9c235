use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::MAX_RESULTS;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON file holding the provider pool
    pub path: PathBuf,
}

/// Submission persistence. Without a `url` submissions are not stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize { MAX_RESULTS }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_injury_weight")]
    pub injury: f64,
    #[serde(default = "default_goal_weight")]
    pub goal: f64,
    #[serde(default = "default_style_weight")]
    pub style: f64,
    #[serde(default = "default_logistics_weight")]
    pub logistics: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            injury: default_injury_weight(),
            goal: default_goal_weight(),
            style: default_style_weight(),
            logistics: default_logistics_weight(),
            availability: default_availability_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            injury: config.injury,
            goal: config.goal,
            style: config.style,
            logistics: config.logistics,
            availability: config.availability,
        }
    }
}

fn default_injury_weight() -> f64 { 30.0 }
fn default_goal_weight() -> f64 { 20.0 }
fn default_style_weight() -> f64 { 20.0 }
fn default_logistics_weight() -> f64 { 20.0 }
fn default_availability_weight() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ALIGNPT_)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ALIGNPT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_database_url(settings, std::env::var("DATABASE_URL").ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ALIGNPT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// The conventional DATABASE_URL wins over whatever the files say
fn apply_database_url(settings: Config, database_url: Option<String>) -> Result<Config, ConfigError> {
    match database_url {
        Some(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        None => Ok(settings),
    }
}
