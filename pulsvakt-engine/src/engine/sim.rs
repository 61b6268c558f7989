//! Deterministic simulation mode.
//!
//! Drives the dashboard model over virtual time with a seeded random source
//! and folds every resulting state into a BLAKE3 digest. Identical seed and
//! configuration produce an identical digest, which is what
//! `simulate --validate-hash` checks.

use blake3::Hasher;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use pulsvakt_config::PulsvaktConfig;
use pulsvakt_core::dashboard::{DashboardModel, FeedSettings};
use pulsvakt_core::metrics::UpdateRules;
use pulsvakt_core::time::{VirtualClock, NANOS_PER_MILLI};

use crate::engine::error::EngineError;
use crate::engine::view::DashboardView;

/// Tick-by-tick dashboard runner over virtual time.
pub struct Simulation {
    clock: VirtualClock,
    rng: SmallRng,
    model: DashboardModel,
    rules: UpdateRules,
    feed_settings: FeedSettings,
    tick_interval_ns: u64,
    state_hasher: Hasher,
}

impl Simulation {
    /// Creates a simulation seeded for both the virtual clock and the
    /// random source.
    pub fn new(seed: u64, config: &PulsvaktConfig) -> Self {
        let clock = VirtualClock::new(seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let rules = config.metrics.update_rules();
        let feed_settings = config.feed.settings();
        let model = DashboardModel::generate(clock.now_ns(), &rules, &feed_settings, &mut rng);

        Self {
            clock,
            rng,
            model,
            rules,
            feed_settings,
            tick_interval_ns: config.engine.tick_interval_ms * NANOS_PER_MILLI,
            state_hasher: Hasher::new(),
        }
    }

    /// Advances virtual time by one interval and the model by one tick,
    /// folding the resulting state into the digest.
    pub fn step(&mut self) {
        self.clock.advance(self.tick_interval_ns);
        let now_ns = self.clock.now_ns();
        let record = self
            .model
            .advance(now_ns, &self.rules, &self.feed_settings, &mut self.rng);

        let metrics = &self.model.metrics;
        self.state_hasher.update(&metrics.users.to_le_bytes());
        self.state_hasher.update(&metrics.revenue.to_le_bytes());
        self.state_hasher.update(&metrics.orders.to_le_bytes());
        self.state_hasher.update(&metrics.performance.to_le_bytes());
        for share in metrics.revenue_breakdown {
            self.state_hasher.update(&share.to_le_bytes());
        }
        if let Some(point) = metrics.traffic_history.back() {
            self.state_hasher.update(point.label.as_bytes());
            self.state_hasher.update(&point.value.to_le_bytes());
        }
        if let Some(record) = record {
            self.state_hasher.update(record.title.as_bytes());
            self.state_hasher.update(record.description.as_bytes());
        }
    }

    /// Runs the simulation for the given number of ticks.
    /// Returns the final state hash as a hex string.
    pub fn run(&mut self, ticks: usize) -> String {
        for _ in 0..ticks {
            self.step();
        }
        hex::encode(self.state_hasher.finalize().as_bytes())
    }

    /// Render-ready projection of the current model.
    pub fn view(&self) -> DashboardView {
        DashboardView::capture(&self.model)
    }
}

/// Compares an expected digest against the actual run result.
pub fn validate_digest(expected: &str, actual: &str) -> Result<(), EngineError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::Validation(format!(
            "state digest mismatch!\nExpected: {expected}\nActual: {actual}"
        )))
    }
}
