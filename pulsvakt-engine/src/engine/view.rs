//! Render-ready projection of the dashboard state.

use serde::Serialize;

use pulsvakt_core::activity::ActivityRecord;
use pulsvakt_core::dashboard::DashboardModel;

/// Everything a renderer needs for one frame: formatted scalar metrics, the
/// ordered traffic series, the 4-way revenue breakdown, and the ordered
/// activity records (newest first).
#[derive(Clone, Debug, Serialize)]
pub struct DashboardView {
    pub users: String,
    pub revenue: String,
    pub orders: String,
    pub performance: String,
    pub traffic: Vec<(String, u32)>,
    pub revenue_breakdown: [f64; 4],
    pub activities: Vec<ActivityRecord>,
}

impl DashboardView {
    pub fn capture(model: &DashboardModel) -> Self {
        let metrics = &model.metrics;
        Self {
            users: group_thousands(metrics.users),
            revenue: format!("${}", group_thousands(metrics.revenue)),
            orders: group_thousands(metrics.orders),
            performance: format!("{:.1}%", metrics.performance),
            traffic: metrics
                .traffic_history
                .iter()
                .map(|point| (point.label.clone(), point.value))
                .collect(),
            revenue_breakdown: metrics.revenue_breakdown,
            activities: model.feed.records().cloned().collect(),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsvakt_core::dashboard::FeedSettings;
    use pulsvakt_core::metrics::UpdateRules;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn capture_formats_scalars() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut model = DashboardModel::generate(
            0,
            &UpdateRules::default(),
            &FeedSettings::default(),
            &mut rng,
        );
        model.metrics.users = 1234;
        model.metrics.revenue = 56_789;
        model.metrics.orders = 42;
        model.metrics.performance = 97.25;

        let view = DashboardView::capture(&model);
        assert_eq!(view.users, "1,234");
        assert_eq!(view.revenue, "$56,789");
        assert_eq!(view.orders, "42");
        assert_eq!(view.performance, "97.2%");
        assert_eq!(view.traffic.len(), model.metrics.traffic_history.len());
    }
}
