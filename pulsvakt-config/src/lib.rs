//! # Pulsvakt Configuration System
//!
//! Hierarchical configuration management for the pulsvakt dashboard engine.
//!
//! ## Features
//! - **Unified Configuration**: Single source of truth across all components
//! - **Validation**: Runtime validation of every tunable parameter
//! - **Environment Awareness**: File overlays plus `PULSVAKT_*` variables

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod engine;
mod error;
mod feed;
mod metrics;
mod telemetry;
mod validation;

pub use engine::EngineConfig;
pub use error::ConfigError;
pub use feed::FeedConfig;
pub use metrics::{DeltaRangeConfig, MetricsConfig};
pub use telemetry::TelemetryConfig;

/// Top-level configuration container for all pulsvakt components.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct PulsvaktConfig {
    /// Monitoring controller parameters (tick interval, resume delay, seed).
    #[validate(nested)]
    pub engine: EngineConfig,

    /// Update engine tuning (delta ranges, jitters, history capacity).
    #[validate(nested)]
    pub metrics: MetricsConfig,

    /// Activity feed parameters (capacity, generation probability).
    #[validate(nested)]
    pub feed: FeedConfig,

    /// Telemetry and observability configuration.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl PulsvaktConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/pulsvakt.yaml` - base settings. If missing, defaults are used.
    /// 3. `config/<environment>.yaml` - environment-specific overrides.
    /// 4. `PULSVAKT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Start with defaults.
        let mut figment = Figment::from(Serialized::defaults(PulsvaktConfig::default()));

        if Path::new("config/pulsvakt.yaml").exists() {
            figment = figment.merge(Yaml::file("config/pulsvakt.yaml"));
        } else {
            println!("config/pulsvakt.yaml not found, using default configuration");
        }

        let env = std::env::var("PULSVAKT_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        figment
            .merge(Env::prefixed("PULSVAKT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(
                path.to_string_lossy().to_string(),
            )));
        }

        Figment::from(Serialized::defaults(PulsvaktConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("PULSVAKT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
