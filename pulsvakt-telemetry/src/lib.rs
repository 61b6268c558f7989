//! # pulsvakt-telemetry
//!
//! Observability layer for the pulsvakt dashboard engine.
//!
//! ### Components:
//! - `logging`: structured logger built on `tracing`
//! - `metrics`: Prometheus registry for tick and activity counters

pub mod logging;
pub mod metrics;

pub use metrics::MetricsRecorder;
