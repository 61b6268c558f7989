//! Composed per-instance dashboard state.
//!
//! Explicitly constructed and owned by whoever drives it (controller,
//! simulation, test harness); there is no process-wide instance.

use rand::Rng;

use crate::activity::{
    maybe_activity, ActivityFeed, ActivityRecord, DEFAULT_ACTIVITY_PROBABILITY,
    DEFAULT_FEED_CAPACITY,
};
use crate::metrics::{MetricsSnapshot, UpdateRules};
use crate::time::format_time;

/// Feed sizing and generation knobs.
#[derive(Clone, Debug)]
pub struct FeedSettings {
    pub capacity: usize,
    pub activity_probability: f64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_FEED_CAPACITY,
            activity_probability: DEFAULT_ACTIVITY_PROBABILITY,
        }
    }
}

/// The complete mutable state behind one dashboard instance.
#[derive(Clone, Debug)]
pub struct DashboardModel {
    pub metrics: MetricsSnapshot,
    pub feed: ActivityFeed,
}

impl DashboardModel {
    /// Fresh state for initialization and reset: seeded metrics, empty feed.
    pub fn generate<R: Rng + ?Sized>(
        now_ns: u64,
        rules: &UpdateRules,
        settings: &FeedSettings,
        rng: &mut R,
    ) -> Self {
        Self {
            metrics: MetricsSnapshot::generate(now_ns, rules, rng),
            feed: ActivityFeed::new(settings.capacity),
        }
    }

    /// One tick: update engine first, then the probabilistic feed append.
    /// Returns the generated record, if any, for logging.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        now_ns: u64,
        rules: &UpdateRules,
        settings: &FeedSettings,
        rng: &mut R,
    ) -> Option<ActivityRecord> {
        self.metrics.advance(now_ns, rules, rng);
        let record = maybe_activity(settings.activity_probability, &format_time(now_ns), rng);
        if let Some(ref record) = record {
            self.feed.push(record.clone());
        }
        record
    }

    /// Appends a lifecycle record outside the tick path.
    pub fn record(&mut self, record: ActivityRecord) {
        self.feed.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::NANOS_PER_SECOND;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn model(seed: u64) -> (DashboardModel, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let model = DashboardModel::generate(
            0,
            &UpdateRules::default(),
            &FeedSettings::default(),
            &mut rng,
        );
        (model, rng)
    }

    #[test]
    fn generate_starts_with_empty_feed() {
        let (model, _) = model(1);
        assert!(model.feed.is_empty());
        assert_eq!(model.feed.capacity(), DEFAULT_FEED_CAPACITY);
    }

    #[test]
    fn advance_pushes_generated_records() {
        let rules = UpdateRules::default();
        let settings = FeedSettings {
            capacity: 12,
            activity_probability: 1.0,
        };
        let (mut model, mut rng) = model(2);
        let record = model
            .advance(NANOS_PER_SECOND, &rules, &settings, &mut rng)
            .expect("guaranteed record");
        assert_eq!(model.feed.newest(), Some(&record));
    }

    #[test]
    fn feed_stays_bounded_over_many_ticks() {
        let rules = UpdateRules::default();
        let settings = FeedSettings {
            capacity: 12,
            activity_probability: 1.0,
        };
        let (mut model, mut rng) = model(3);
        for tick in 0..100u64 {
            model.advance(tick * NANOS_PER_SECOND, &rules, &settings, &mut rng);
            assert!(model.feed.len() <= 12);
            assert!(model.metrics.traffic_history.len() <= rules.history_capacity);
        }
        assert_eq!(model.feed.len(), 12);
    }

    #[test]
    fn lifecycle_records_bypass_probability() {
        let (mut model, _) = model(4);
        model.record(ActivityRecord::monitoring_started("10:00:00".into()));
        assert_eq!(
            model.feed.newest().map(|r| r.title.as_str()),
            Some("Monitoring started")
        );
    }
}
