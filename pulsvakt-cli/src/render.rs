//! Console renderer for live monitoring mode.

use async_trait::async_trait;
use pulsvakt_engine::{DashboardView, RenderError, Renderer};

/// Renders each frame as a compact terminal summary.
pub struct ConsoleRenderer;

#[async_trait]
impl Renderer for ConsoleRenderer {
    async fn render(&self, view: &DashboardView) -> Result<(), RenderError> {
        println!(
            "users {:>8}  revenue {:>10}  orders {:>6}  performance {:>6}",
            view.users, view.revenue, view.orders, view.performance
        );
        if let Some((label, value)) = view.traffic.last() {
            let [products, services, subscriptions, other] = view.revenue_breakdown;
            println!(
                "  traffic @ {label}: {value}  |  breakdown {products:.0}/{services:.0}/{subscriptions:.0}/{other:.0}"
            );
        }
        if let Some(activity) = view.activities.first() {
            println!(
                "  {} {}: {} \u{2022} {}",
                activity.icon, activity.title, activity.description, activity.timestamp
            );
        }
        Ok(())
    }
}
