//! Metrics snapshot and its randomized-walk update engine.
//!
//! The snapshot is mutated in place once per tick. Randomness is drawn into
//! [`TickDeltas`] first and applied separately, so tests can drive the update
//! rules with known deltas.

use std::collections::VecDeque;
use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use crate::time::{format_time, hour_of_day, NANOS_PER_MINUTE};
use crate::traffic::traffic_value;

/// Fixed revenue-share baselines: products, services, subscriptions, other.
pub const BREAKDOWN_BASELINE: [f64; 4] = [45.0, 30.0, 20.0, 5.0];

/// Per-category floors matching [`BREAKDOWN_BASELINE`].
pub const BREAKDOWN_FLOOR: [f64; 4] = [35.0, 20.0, 15.0, 2.0];

/// Number of synthetic history points seeded at initialization.
pub const SEED_HISTORY_POINTS: usize = 10;

const PERFORMANCE_MIN: f64 = 85.0;
const PERFORMANCE_MAX: f64 = 100.0;

/// One point on the traffic series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrafficPoint {
    pub label: String,
    pub value: u32,
}

/// Tunable parameters for the update engine.
///
/// Integer delta ranges are half-open `[min, max)`; the jitters are
/// half-widths of symmetric uniform perturbations.
#[derive(Clone, Debug)]
pub struct UpdateRules {
    pub users_delta: Range<i64>,
    pub revenue_delta: Range<u64>,
    pub orders_delta: Range<i64>,
    pub performance_jitter: f64,
    pub breakdown_jitter: f64,
    pub history_capacity: usize,
}

impl Default for UpdateRules {
    fn default() -> Self {
        Self {
            users_delta: -5..15,
            revenue_delta: 100..900,
            orders_delta: -2..6,
            performance_jitter: 1.5,
            breakdown_jitter: 4.0,
            history_capacity: 15,
        }
    }
}

/// The randomness drawn for one tick, separate from its application.
#[derive(Clone, Debug)]
pub struct TickDeltas {
    pub users: i64,
    pub revenue: u64,
    pub orders: i64,
    pub performance: f64,
    pub breakdown: [f64; 4],
}

impl TickDeltas {
    /// Draws one tick's worth of deltas from the random source.
    pub fn sample<R: Rng + ?Sized>(rules: &UpdateRules, rng: &mut R) -> Self {
        let users = rng.random_range(rules.users_delta.clone());
        let revenue = rng.random_range(rules.revenue_delta.clone());
        let orders = rng.random_range(rules.orders_delta.clone());
        let performance = (rng.random::<f64>() - 0.5) * 2.0 * rules.performance_jitter;
        let mut breakdown = [0.0; 4];
        for slot in &mut breakdown {
            *slot = (rng.random::<f64>() - 0.5) * 2.0 * rules.breakdown_jitter;
        }
        Self {
            users,
            revenue,
            orders,
            performance,
            breakdown,
        }
    }
}

/// The complete current value of the fabricated metrics.
#[derive(Clone, Debug, Serialize)]
pub struct MetricsSnapshot {
    pub users: u64,
    pub revenue: u64,
    pub orders: u64,
    pub performance: f64,
    pub traffic_history: VecDeque<TrafficPoint>,
    pub revenue_breakdown: [f64; 4],
}

impl MetricsSnapshot {
    /// Fresh snapshot for initialization and reset.
    ///
    /// The traffic history is seeded with [`SEED_HISTORY_POINTS`] points
    /// labeled one minute apart, ending one minute before `now_ns`.
    pub fn generate<R: Rng + ?Sized>(now_ns: u64, rules: &UpdateRules, rng: &mut R) -> Self {
        let mut traffic_history = VecDeque::with_capacity(rules.history_capacity.max(1));
        for i in 0..SEED_HISTORY_POINTS {
            let point_ns =
                now_ns.saturating_sub((SEED_HISTORY_POINTS - i) as u64 * NANOS_PER_MINUTE);
            traffic_history.push_back(TrafficPoint {
                label: format_time(point_ns),
                value: traffic_value(hour_of_day(point_ns), rng),
            });
        }
        // Capacities below the seed count still start within bounds.
        while traffic_history.len() > rules.history_capacity {
            traffic_history.pop_front();
        }

        Self {
            users: rng.random_range(50..150),
            revenue: rng.random_range(5000..15_000),
            orders: rng.random_range(10..30),
            performance: 95.0 + rng.random::<f64>() * 4.0,
            traffic_history,
            revenue_breakdown: BREAKDOWN_BASELINE,
        }
    }

    /// Applies one tick's deltas and appends one traffic point.
    ///
    /// Counters saturate at zero, revenue only grows, performance stays in
    /// `[85, 100]`, and the history evicts its oldest point once `capacity`
    /// is exceeded. The revenue breakdown is re-randomized from the fixed
    /// baseline, never compounded across ticks.
    pub fn apply(&mut self, deltas: &TickDeltas, point: TrafficPoint, capacity: usize) {
        self.users = self.users.saturating_add_signed(deltas.users);
        self.revenue = self.revenue.saturating_add(deltas.revenue);
        self.orders = self.orders.saturating_add_signed(deltas.orders);
        self.performance =
            (self.performance + deltas.performance).clamp(PERFORMANCE_MIN, PERFORMANCE_MAX);

        self.traffic_history.push_back(point);
        while self.traffic_history.len() > capacity {
            self.traffic_history.pop_front();
        }

        for (i, share) in self.revenue_breakdown.iter_mut().enumerate() {
            *share = (BREAKDOWN_BASELINE[i] + deltas.breakdown[i]).max(BREAKDOWN_FLOOR[i]);
        }
    }

    /// Advances the snapshot by one tick: sample deltas, generate the
    /// traffic point for `now_ns`, apply both.
    pub fn advance<R: Rng + ?Sized>(&mut self, now_ns: u64, rules: &UpdateRules, rng: &mut R) {
        let deltas = TickDeltas::sample(rules, rng);
        let point = TrafficPoint {
            label: format_time(now_ns),
            value: traffic_value(hour_of_day(now_ns), rng),
        };
        self.apply(&deltas, point, rules.history_capacity);
    }
}
