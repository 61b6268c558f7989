//! # pulsvakt-core
//!
//! Domain layer for the pulsvakt demo dashboard engine.
//! Every number here is fabricated by an injectable random source; the crate
//! performs no I/O and all of its operations are total.
//!
//! ### Key Submodules:
//! - `time`: `VirtualClock` using atomic counters, plus wall-clock access and
//!   display-time formatting
//! - `traffic`: time-of-day banded traffic load generator
//! - `metrics`: the metrics snapshot and its randomized-walk update engine
//! - `activity`: bounded newest-first activity feed and the event catalog
//! - `dashboard`: the composed per-instance dashboard state

pub mod activity;
pub mod dashboard;
pub mod metrics;
pub mod time;
pub mod traffic;

pub mod prelude {
    pub use crate::activity::{ActivityFeed, ActivityRecord};
    pub use crate::dashboard::{DashboardModel, FeedSettings};
    pub use crate::metrics::{MetricsSnapshot, TickDeltas, TrafficPoint, UpdateRules};
    pub use crate::time::{Clock, SystemClock, VirtualClock};
}
