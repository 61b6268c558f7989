//! ## pulsvakt-telemetry::metrics
//! **Prometheus registry for the dashboard engine**
//!
//! ### Components:
//! - tick counter and tick-duration histogram
//! - generated-activity counter

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub ticks: Counter,
    pub activities: Counter,
    pub tick_duration: Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let ticks = Counter::new("pulsvakt_ticks_total", "Total update engine ticks").unwrap();
        let activities = Counter::new(
            "pulsvakt_activities_total",
            "Total generated activity records",
        )
        .unwrap();

        let tick_duration = Histogram::with_opts(
            HistogramOpts::new("pulsvakt_tick_duration_ns", "Update engine tick execution time")
                .buckets(vec![1_000.0, 10_000.0, 100_000.0, 1_000_000.0]),
        )
        .unwrap();

        registry.register(Box::new(ticks.clone())).unwrap();
        registry.register(Box::new(activities.clone())).unwrap();
        registry.register(Box::new(tick_duration.clone())).unwrap();

        Self {
            registry,
            ticks,
            activities,
            tick_duration,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_ticks(&self) {
        self.ticks.inc();
    }

    pub fn inc_activities(&self) {
        self.activities.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let recorder = MetricsRecorder::new();
        recorder.inc_ticks();
        recorder.inc_ticks();
        recorder.inc_activities();
        assert_eq!(recorder.ticks.get(), 2.0);
        assert_eq!(recorder.activities.get(), 1.0);
    }

    #[test]
    fn gather_renders_exposition_format() {
        let recorder = MetricsRecorder::new();
        recorder.inc_ticks();
        let output = recorder.gather_metrics().expect("gather should succeed");
        assert!(output.contains("pulsvakt_ticks_total"));
    }
}
