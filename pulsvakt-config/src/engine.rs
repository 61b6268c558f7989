//! Controller and scheduling configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Monitoring controller parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct EngineConfig {
    /// Periodic tick interval (milliseconds).
    #[serde(default = "default_tick_interval_ms")]
    #[validate(range(min = 100, max = 600_000))]
    pub tick_interval_ms: u64,

    /// Delay before monitoring resumes after a reset (milliseconds).
    #[serde(default = "default_resume_delay_ms")]
    #[validate(range(max = 60_000))]
    pub resume_delay_ms: u64,

    /// Fixed seed for deterministic runs. Unset means entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tick_interval_ms() -> u64 {
    2000
}
fn default_resume_delay_ms() -> u64 {
    1000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            resume_delay_ms: default_resume_delay_ms(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_default_engine_config() {
        let config = EngineConfig::default();
        config.validate().expect("Default config should be valid");
    }

    #[test]
    fn rejects_sub_100ms_interval() {
        let mut config = EngineConfig::default();
        config.tick_interval_ms = 50;
        assert!(config.validate().is_err());
    }
}
