//! Monitoring controller: the start/stop/reset state machine that owns the
//! periodic tick and sequences update engine, activity feed, telemetry, and
//! renderer notification.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use opentelemetry::KeyValue;
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};

use pulsvakt_config::PulsvaktConfig;
use pulsvakt_core::activity::ActivityRecord;
use pulsvakt_core::dashboard::{DashboardModel, FeedSettings};
use pulsvakt_core::metrics::UpdateRules;
use pulsvakt_core::time::{format_time, Clock, SystemClock};
use pulsvakt_telemetry::logging::EventLogger;
use pulsvakt_telemetry::MetricsRecorder;

use crate::engine::renderer::Renderer;
use crate::engine::view::DashboardView;

/// Lifecycle states of the monitoring controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorState {
    Stopped,
    Running,
}

/// State shared between the controller handle and its tick task.
struct Shared {
    model: Mutex<DashboardModel>,
    rng: Mutex<SmallRng>,
    clock: Arc<dyn Clock>,
    rules: UpdateRules,
    feed_settings: FeedSettings,
    renderer: Arc<dyn Renderer>,
    metrics: Arc<MetricsRecorder>,
    // Flipped before the tick task is aborted, so a scheduled-but-unfired
    // tick observes it and does nothing.
    active: AtomicBool,
}

/// Owns one dashboard instance and its periodic tick task.
pub struct Monitor {
    shared: Arc<Shared>,
    tick_interval: Duration,
    resume_delay: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Monitor {
    /// Creates a stopped monitor over the wall clock.
    pub fn new(
        config: &PulsvaktConfig,
        renderer: Arc<dyn Renderer>,
        metrics: Arc<MetricsRecorder>,
    ) -> Self {
        Self::with_clock(config, renderer, metrics, Arc::new(SystemClock))
    }

    /// Creates a stopped monitor with an injected clock.
    pub fn with_clock(
        config: &PulsvaktConfig,
        renderer: Arc<dyn Renderer>,
        metrics: Arc<MetricsRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        info!("Initializing dashboard monitor");
        debug!("Engine config: {:?}", config.engine);

        let rules = config.metrics.update_rules();
        let feed_settings = config.feed.settings();
        let mut rng = match config.engine.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let now_ns = clock.now_ns();
        let mut model = DashboardModel::generate(now_ns, &rules, &feed_settings, &mut rng);
        model.record(ActivityRecord::initialized(format_time(now_ns)));

        Self {
            shared: Arc::new(Shared {
                model: Mutex::new(model),
                rng: Mutex::new(rng),
                clock,
                rules,
                feed_settings,
                renderer,
                metrics,
                active: AtomicBool::new(false),
            }),
            tick_interval: Duration::from_millis(config.engine.tick_interval_ms),
            resume_delay: Duration::from_millis(config.engine.resume_delay_ms),
            task: Mutex::new(None),
        }
    }

    /// Current controller state.
    pub fn state(&self) -> MonitorState {
        if self.shared.active.load(Ordering::SeqCst) {
            MonitorState::Running
        } else {
            MonitorState::Stopped
        }
    }

    /// Snapshot of the current view, regardless of state.
    pub fn view(&self) -> DashboardView {
        DashboardView::capture(&self.shared.model.lock())
    }

    /// Begins the periodic tick. Repeated calls collapse to one active timer.
    #[instrument(skip(self))]
    pub async fn start(&self) {
        if self.shared.active.swap(true, Ordering::SeqCst) {
            debug!("Monitor already running");
            return;
        }
        info!("Monitoring started");
        self.lifecycle(ActivityRecord::monitoring_started).await;

        let shared = self.shared.clone();
        let period = self.tick_interval;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // A fresh interval completes its first tick immediately; consume
            // it so the first dashboard tick lands one full period from now.
            interval.tick().await;
            loop {
                interval.tick().await;
                if !shared.active.load(Ordering::SeqCst) {
                    break;
                }
                Self::run_tick(&shared).await;
            }
        });
        *self.task.lock() = Some(handle);
    }

    /// Cancels the periodic tick. Repeated calls are no-ops.
    #[instrument(skip(self))]
    pub async fn stop(&self) {
        if !self.shared.active.swap(false, Ordering::SeqCst) {
            debug!("Monitor already stopped");
            return;
        }
        let handle = self.task.lock().take();
        if let Some(handle) = handle {
            // State mutation happens synchronously under the model lock, so
            // aborting here can only cut short a render notification.
            handle.abort();
            let _ = handle.await;
        }
        info!("Monitoring paused");
        self.lifecycle(ActivityRecord::monitoring_paused).await;
    }

    /// Reinitializes all dashboard state; resumes after the configured delay
    /// when monitoring was active.
    #[instrument(skip(self))]
    pub async fn reset(&self) {
        let was_running = self.state() == MonitorState::Running;
        if was_running {
            self.stop().await;
        }

        let now_ns = self.shared.clock.now_ns();
        {
            let mut rng = self.shared.rng.lock();
            let mut model = self.shared.model.lock();
            *model = DashboardModel::generate(
                now_ns,
                &self.shared.rules,
                &self.shared.feed_settings,
                &mut rng,
            );
        }
        info!("Dashboard data reset");
        self.lifecycle(ActivityRecord::data_reset).await;

        if was_running {
            tokio::time::sleep(self.resume_delay).await;
            self.start().await;
        }
    }

    async fn run_tick(shared: &Arc<Shared>) {
        let started = std::time::Instant::now();
        let now_ns = shared.clock.now_ns();

        let (view, record) = {
            let mut rng = shared.rng.lock();
            let mut model = shared.model.lock();
            let record = model.advance(now_ns, &shared.rules, &shared.feed_settings, &mut rng);
            (DashboardView::capture(&model), record)
        };

        shared.metrics.inc_ticks();
        shared
            .metrics
            .tick_duration
            .observe(started.elapsed().as_nanos() as f64);

        if let Some(record) = record {
            shared.metrics.inc_activities();
            EventLogger::log_event(
                "activity",
                vec![
                    KeyValue::new("title", record.title.clone()),
                    KeyValue::new("description", record.description.clone()),
                ],
            )
            .await;
        }

        if let Err(e) = shared.renderer.render(&view).await {
            warn!("Renderer unavailable: {e}");
        }
    }

    /// Appends a lifecycle record and notifies the renderer.
    async fn lifecycle(&self, make: fn(String) -> ActivityRecord) {
        let record = make(format_time(self.shared.clock.now_ns()));
        let view = {
            let mut model = self.shared.model.lock();
            model.record(record);
            DashboardView::capture(&model)
        };
        if let Err(e) = self.shared.renderer.render(&view).await {
            warn!("Renderer unavailable: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::{NullRenderer, RenderError};
    use async_trait::async_trait;
    use pulsvakt_core::time::VirtualClock;
    use std::sync::atomic::AtomicUsize;

    struct CountingRenderer {
        frames: AtomicUsize,
    }

    #[async_trait]
    impl Renderer for CountingRenderer {
        async fn render(&self, _view: &DashboardView) -> Result<(), RenderError> {
            self.frames.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingRenderer;

    #[async_trait]
    impl Renderer for FailingRenderer {
        async fn render(&self, _view: &DashboardView) -> Result<(), RenderError> {
            Err(RenderError::Unavailable("no target element".into()))
        }
    }

    fn seeded_config() -> PulsvaktConfig {
        let mut config = PulsvaktConfig::default();
        config.engine.seed = Some(42);
        config
    }

    fn monitor_with(renderer: Arc<dyn Renderer>) -> (Monitor, Arc<MetricsRecorder>) {
        let metrics = Arc::new(MetricsRecorder::new());
        let monitor = Monitor::with_clock(
            &seeded_config(),
            renderer,
            metrics.clone(),
            Arc::new(VirtualClock::new(12 * 3600 * 1_000_000_000)),
        );
        (monitor, metrics)
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent() {
        let (monitor, metrics) = monitor_with(Arc::new(NullRenderer));
        monitor.start().await;
        monitor.start().await;
        assert_eq!(monitor.state(), MonitorState::Running);

        tokio::time::sleep(Duration::from_millis(10_100)).await;
        // One active timer, not two: five 2s periods elapsed.
        assert_eq!(metrics.ticks.get(), 5.0);
        monitor.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_pending_ticks() {
        let (monitor, metrics) = monitor_with(Arc::new(NullRenderer));
        monitor.start().await;
        tokio::time::sleep(Duration::from_millis(4_100)).await;
        assert_eq!(metrics.ticks.get(), 2.0);

        monitor.stop().await;
        monitor.stop().await;
        assert_eq!(monitor.state(), MonitorState::Stopped);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(metrics.ticks.get(), 2.0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_and_start_lifecycle_records_reach_the_feed() {
        let (monitor, _metrics) = monitor_with(Arc::new(NullRenderer));
        monitor.start().await;
        monitor.stop().await;

        let titles: Vec<String> = monitor
            .view()
            .activities
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles[0], "Monitoring paused");
        assert_eq!(titles[1], "Monitoring started");
        assert_eq!(titles[2], "Dashboard initialized");
    }

    #[tokio::test(start_paused = true)]
    async fn reset_from_running_resumes_after_delay() {
        let (monitor, _metrics) = monitor_with(Arc::new(NullRenderer));
        monitor.start().await;
        monitor.reset().await;
        assert_eq!(monitor.state(), MonitorState::Running);

        let newest_titles: Vec<String> = monitor
            .view()
            .activities
            .iter()
            .map(|r| r.title.clone())
            .collect();
        // The regenerated feed holds only post-reset records.
        assert!(newest_titles.contains(&"Data reset".to_string()));
        assert!(!newest_titles.contains(&"Dashboard initialized".to_string()));
        monitor.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn reset_from_stopped_stays_stopped() {
        let (monitor, metrics) = monitor_with(Arc::new(NullRenderer));
        monitor.reset().await;
        assert_eq!(monitor.state(), MonitorState::Stopped);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(metrics.ticks.get(), 0.0);

        let newest = monitor.view().activities[0].title.clone();
        assert_eq!(newest, "Data reset");
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_advance_state_and_render() {
        let renderer = Arc::new(CountingRenderer {
            frames: AtomicUsize::new(0),
        });
        let (monitor, _metrics) = monitor_with(renderer.clone());
        let revenue_before = monitor.view().revenue.clone();

        monitor.start().await;
        tokio::time::sleep(Duration::from_millis(6_100)).await;
        monitor.stop().await;

        assert_ne!(monitor.view().revenue, revenue_before);
        // One frame per lifecycle transition plus one per tick.
        assert!(renderer.frames.load(Ordering::SeqCst) >= 5);
    }

    #[tokio::test(start_paused = true)]
    async fn renderer_failure_never_fails_the_engine() {
        let (monitor, metrics) = monitor_with(Arc::new(FailingRenderer));
        monitor.start().await;
        tokio::time::sleep(Duration::from_millis(4_100)).await;
        monitor.reset().await;
        monitor.stop().await;

        // Ticks completed despite every render failing.
        assert!(metrics.ticks.get() >= 2.0);
    }

    #[tokio::test(start_paused = true)]
    async fn feed_stays_bounded_under_long_runs() {
        let mut config = seeded_config();
        config.feed.activity_probability = 1.0;
        let metrics = Arc::new(MetricsRecorder::new());
        let monitor = Monitor::with_clock(
            &config,
            Arc::new(NullRenderer),
            metrics,
            Arc::new(VirtualClock::new(0)),
        );

        monitor.start().await;
        tokio::time::sleep(Duration::from_secs(120)).await;
        monitor.stop().await;

        let view = monitor.view();
        assert_eq!(view.activities.len(), 12);
        assert_eq!(view.traffic.len(), 15);
    }
}
