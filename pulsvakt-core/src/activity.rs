//! Activity feed and the simulated event catalog.
//!
//! The catalog is configuration data: ten templates, each with a category
//! whose description variants live in fixed tables below. Two categories
//! (order, cart) generate their single description dynamically instead of
//! picking from a list.

use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

/// Default feed capacity; older records beyond it are evicted.
pub const DEFAULT_FEED_CAPACITY: usize = 12;

/// Default chance of generating one activity per tick.
pub const DEFAULT_ACTIVITY_PROBABILITY: f64 = 0.3;

/// Discrete event shown in the dashboard's activity list.
///
/// The timestamp is formatted at creation time and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub timestamp: String,
}

impl ActivityRecord {
    pub fn new(
        icon: &str,
        title: &str,
        description: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Emitted once when a dashboard instance comes up.
    pub fn initialized(timestamp: String) -> Self {
        Self::new(
            "🎉",
            "Dashboard initialized",
            "Welcome to the real-time analytics dashboard",
            timestamp,
        )
    }

    pub fn monitoring_started(timestamp: String) -> Self {
        Self::new(
            "🚀",
            "Monitoring started",
            "Real-time data monitoring is now active",
            timestamp,
        )
    }

    pub fn monitoring_paused(timestamp: String) -> Self {
        Self::new(
            "⏸️",
            "Monitoring paused",
            "Real-time data monitoring has been paused",
            timestamp,
        )
    }

    pub fn data_reset(timestamp: String) -> Self {
        Self::new(
            "🔄",
            "Data reset",
            "All dashboard data has been reset to initial state",
            timestamp,
        )
    }
}

/// Newest-first, capacity-bounded log of activity records.
#[derive(Clone, Debug)]
pub struct ActivityFeed {
    records: VecDeque<ActivityRecord>,
    capacity: usize,
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts at the front and evicts from the back until at capacity.
    pub fn push(&mut self, record: ActivityRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    /// Records in display order, newest first.
    pub fn records(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter()
    }

    pub fn newest(&self) -> Option<&ActivityRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Category tag of a catalog template; selects the description table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    User,
    Payment,
    Order,
    System,
    Login,
    Cart,
    Warning,
    Success,
    Notification,
    Global,
}

struct ActivityTemplate {
    icon: &'static str,
    title: &'static str,
    kind: ActivityKind,
}

const CATALOG: [ActivityTemplate; 10] = [
    ActivityTemplate {
        icon: "👤",
        title: "New user registration",
        kind: ActivityKind::User,
    },
    ActivityTemplate {
        icon: "💰",
        title: "Payment processed",
        kind: ActivityKind::Payment,
    },
    ActivityTemplate {
        icon: "📦",
        title: "Order shipped",
        kind: ActivityKind::Order,
    },
    ActivityTemplate {
        icon: "🔧",
        title: "System maintenance",
        kind: ActivityKind::System,
    },
    ActivityTemplate {
        icon: "📱",
        title: "Mobile app login",
        kind: ActivityKind::Login,
    },
    ActivityTemplate {
        icon: "🛒",
        title: "Cart abandoned",
        kind: ActivityKind::Cart,
    },
    ActivityTemplate {
        icon: "⚠️",
        title: "Server warning",
        kind: ActivityKind::Warning,
    },
    ActivityTemplate {
        icon: "✅",
        title: "Backup completed",
        kind: ActivityKind::Success,
    },
    ActivityTemplate {
        icon: "🔔",
        title: "New notification",
        kind: ActivityKind::Notification,
    },
    ActivityTemplate {
        icon: "🌍",
        title: "International access",
        kind: ActivityKind::Global,
    },
];

const USER_DESCRIPTIONS: &[&str] = &[
    "from New York",
    "from California",
    "from London",
    "from Tokyo",
    "from Berlin",
    "from Sydney",
];
const PAYMENT_DESCRIPTIONS: &[&str] = &[
    "$299.99 transaction",
    "$149.50 transaction",
    "$89.99 transaction",
    "$599.00 transaction",
    "$1,234.56 transaction",
];
const SYSTEM_DESCRIPTIONS: &[&str] = &[
    "Database optimization",
    "Cache clearing",
    "Security update",
    "Performance tuning",
    "SSL renewal",
];
const LOGIN_DESCRIPTIONS: &[&str] = &[
    "iOS user login",
    "Android user login",
    "Web app access",
    "Desktop application",
];
const WARNING_DESCRIPTIONS: &[&str] = &[
    "High CPU usage detected",
    "Memory threshold reached",
    "Network latency spike",
    "Disk space low",
];
const SUCCESS_DESCRIPTIONS: &[&str] = &[
    "Daily backup completed",
    "Security scan passed",
    "Data sync successful",
    "Health check OK",
];
const NOTIFICATION_DESCRIPTIONS: &[&str] = &[
    "Email campaign sent",
    "Push notification delivered",
    "SMS alert sent",
];
const GLOBAL_DESCRIPTIONS: &[&str] = &[
    "Access from Europe",
    "Access from Asia",
    "Access from Americas",
    "Access from Oceania",
];
const FALLBACK_DESCRIPTION: &str = "System event occurred";

fn pick<R: Rng + ?Sized>(variants: &[&str], rng: &mut R) -> String {
    match variants.len() {
        0 => FALLBACK_DESCRIPTION.to_string(),
        n => variants[rng.random_range(0..n)].to_string(),
    }
}

/// One description for the given category, chosen uniformly from its table.
/// Order and cart embed freshly drawn numbers instead of using a table.
pub fn describe<R: Rng + ?Sized>(kind: ActivityKind, rng: &mut R) -> String {
    match kind {
        ActivityKind::User => pick(USER_DESCRIPTIONS, rng),
        ActivityKind::Payment => pick(PAYMENT_DESCRIPTIONS, rng),
        ActivityKind::Order => format!("Order #{}", rng.random_range(10_000..100_000)),
        ActivityKind::System => pick(SYSTEM_DESCRIPTIONS, rng),
        ActivityKind::Login => pick(LOGIN_DESCRIPTIONS, rng),
        ActivityKind::Cart => format!("Items worth ${:.2}", rng.random::<f64>() * 500.0 + 50.0),
        ActivityKind::Warning => pick(WARNING_DESCRIPTIONS, rng),
        ActivityKind::Success => pick(SUCCESS_DESCRIPTIONS, rng),
        ActivityKind::Notification => pick(NOTIFICATION_DESCRIPTIONS, rng),
        ActivityKind::Global => pick(GLOBAL_DESCRIPTIONS, rng),
    }
}

/// With the given probability, produces one populated record from a uniformly
/// chosen catalog template, stamped with `timestamp`.
pub fn maybe_activity<R: Rng + ?Sized>(
    probability: f64,
    timestamp: &str,
    rng: &mut R,
) -> Option<ActivityRecord> {
    if !rng.random_bool(probability.clamp(0.0, 1.0)) {
        return None;
    }
    let template = &CATALOG[rng.random_range(0..CATALOG.len())];
    let description = describe(template.kind, rng);
    Some(ActivityRecord::new(
        template.icon,
        template.title,
        description,
        timestamp,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn record(n: usize) -> ActivityRecord {
        ActivityRecord::new("🔔", &format!("event {n}"), "test", "00:00:00")
    }

    #[test]
    fn push_inserts_newest_first() {
        let mut feed = ActivityFeed::new(12);
        feed.push(record(1));
        feed.push(record(2));
        assert_eq!(feed.newest().map(|r| r.title.as_str()), Some("event 2"));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn feed_evicts_oldest_beyond_capacity() {
        let mut feed = ActivityFeed::new(12);
        for n in 0..20 {
            feed.push(record(n));
        }
        assert_eq!(feed.len(), 12);
        let titles: Vec<&str> = feed.records().map(|r| r.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"event 19"));
        assert_eq!(titles.last(), Some(&"event 8"));
    }

    #[test]
    fn zero_probability_never_generates() {
        let mut rng = SmallRng::seed_from_u64(8);
        for _ in 0..100 {
            assert!(maybe_activity(0.0, "12:00:00", &mut rng).is_none());
        }
    }

    #[test]
    fn certain_probability_always_generates() {
        let mut rng = SmallRng::seed_from_u64(8);
        for _ in 0..100 {
            let record = maybe_activity(1.0, "12:00:00", &mut rng).expect("guaranteed record");
            assert_eq!(record.timestamp, "12:00:00");
            assert!(!record.title.is_empty());
        }
    }

    #[test]
    fn order_descriptions_embed_an_order_number() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..50 {
            let description = describe(ActivityKind::Order, &mut rng);
            let number: u32 = description
                .strip_prefix("Order #")
                .expect("order prefix")
                .parse()
                .expect("numeric order id");
            assert!((10_000..100_000).contains(&number));
        }
    }

    #[test]
    fn cart_descriptions_embed_an_amount() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..50 {
            let description = describe(ActivityKind::Cart, &mut rng);
            let amount: f64 = description
                .strip_prefix("Items worth $")
                .expect("cart prefix")
                .parse()
                .expect("numeric amount");
            assert!((50.0..550.0).contains(&amount));
        }
    }

    #[test]
    fn static_categories_draw_from_their_tables() {
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..50 {
            let description = describe(ActivityKind::Warning, &mut rng);
            assert!(WARNING_DESCRIPTIONS.contains(&description.as_str()));
        }
    }

    #[test]
    fn lifecycle_records_carry_their_timestamps() {
        let record = ActivityRecord::data_reset("09:30:00".to_string());
        assert_eq!(record.title, "Data reset");
        assert_eq!(record.timestamp, "09:30:00");
    }
}
