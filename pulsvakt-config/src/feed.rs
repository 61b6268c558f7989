//! Activity feed configuration.

use pulsvakt_core::dashboard::FeedSettings;
use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Activity feed parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FeedConfig {
    /// Maximum records kept in the feed; older records are evicted.
    #[serde(default = "default_capacity")]
    #[validate(range(min = 1, max = 1000))]
    pub capacity: usize,

    /// Chance of generating one activity record per tick.
    #[serde(default = "default_activity_probability")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub activity_probability: f64,
}

fn default_capacity() -> usize {
    12
}
fn default_activity_probability() -> f64 {
    0.3
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            activity_probability: default_activity_probability(),
        }
    }
}

impl FeedConfig {
    /// Converts the validated configuration into core feed settings.
    pub fn settings(&self) -> FeedSettings {
        FeedSettings {
            capacity: self.capacity,
            activity_probability: self.activity_probability,
        }
    }
}
