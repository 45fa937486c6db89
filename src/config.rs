use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::{MatchScorer, VisibilityFilter};
use crate::models::VisibilityTier;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub visibility: VisibilitySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// Size of the candidate sample the data layer should draw
    #[serde(default = "default_candidate_pool_size")]
    pub candidate_pool_size: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            candidate_pool_size: default_candidate_pool_size(),
        }
    }
}

impl MatchingSettings {
    pub fn scorer(&self) -> MatchScorer {
        MatchScorer::new(self.default_limit.min(self.max_limit))
    }

    /// Requested limit, capped at `max_limit`
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 100 }
fn default_candidate_pool_size() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct VisibilitySettings {
    /// Tier for fields with neither a policy entry nor a default
    #[serde(default = "default_unknown_field_tier")]
    pub unknown_field_tier: VisibilityTier,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            unknown_field_tier: default_unknown_field_tier(),
        }
    }
}

impl VisibilitySettings {
    pub fn filter(&self) -> VisibilityFilter {
        VisibilityFilter::with_fallback(self.unknown_field_tier)
    }
}

fn default_unknown_field_tier() -> VisibilityTier { VisibilityTier::Public }

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
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with CPSOCIAL__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., CPSOCIAL__MATCHING__DEFAULT_LIMIT -> matching.default_limit
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Parse settings from TOML text, without environment overrides
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CPSOCIAL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
