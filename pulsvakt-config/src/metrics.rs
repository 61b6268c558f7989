//! Update engine tuning.
//!
//! Delta ranges and jitters for the randomized walk, plus the traffic
//! history capacity. Defaults reproduce the stock dashboard behavior.

use pulsvakt_core::metrics::UpdateRules;
use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Update engine configuration parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct MetricsConfig {
    /// Rolling traffic history capacity.
    #[serde(default = "default_history_capacity")]
    #[validate(range(min = 1, max = 10_000))]
    pub history_capacity: usize,

    /// Per-tick user count delta range.
    #[serde(default = "default_users_delta")]
    #[validate(custom(function = validation::validate_delta_range))]
    pub users_delta: DeltaRangeConfig,

    /// Per-tick revenue increase range; must stay non-negative so revenue
    /// never decreases.
    #[serde(default = "default_revenue_delta")]
    #[validate(custom(function = validation::validate_non_negative_range))]
    pub revenue_delta: DeltaRangeConfig,

    /// Per-tick order count delta range.
    #[serde(default = "default_orders_delta")]
    #[validate(custom(function = validation::validate_delta_range))]
    pub orders_delta: DeltaRangeConfig,

    /// Half-width of the uniform performance perturbation.
    #[serde(default = "default_performance_jitter")]
    #[validate(range(min = 0.0, max = 50.0))]
    pub performance_jitter: f64,

    /// Half-width of the uniform revenue-breakdown perturbation.
    #[serde(default = "default_breakdown_jitter")]
    #[validate(range(min = 0.0, max = 50.0))]
    pub breakdown_jitter: f64,
}

/// Half-open `[min, max)` integer range.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct DeltaRangeConfig {
    pub min: i64,
    pub max: i64,
}

fn default_history_capacity() -> usize {
    15
}
fn default_users_delta() -> DeltaRangeConfig {
    DeltaRangeConfig { min: -5, max: 15 }
}
fn default_revenue_delta() -> DeltaRangeConfig {
    DeltaRangeConfig { min: 100, max: 900 }
}
fn default_orders_delta() -> DeltaRangeConfig {
    DeltaRangeConfig { min: -2, max: 6 }
}
fn default_performance_jitter() -> f64 {
    1.5
}
fn default_breakdown_jitter() -> f64 {
    4.0
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            users_delta: default_users_delta(),
            revenue_delta: default_revenue_delta(),
            orders_delta: default_orders_delta(),
            performance_jitter: default_performance_jitter(),
            breakdown_jitter: default_breakdown_jitter(),
        }
    }
}

impl MetricsConfig {
    /// Converts the validated configuration into core update rules.
    pub fn update_rules(&self) -> UpdateRules {
        UpdateRules {
            users_delta: self.users_delta.min..self.users_delta.max,
            revenue_delta: self.revenue_delta.min as u64..self.revenue_delta.max as u64,
            orders_delta: self.orders_delta.min..self.orders_delta.max,
            performance_jitter: self.performance_jitter,
            breakdown_jitter: self.breakdown_jitter,
            history_capacity: self.history_capacity,
        }
    }
}
