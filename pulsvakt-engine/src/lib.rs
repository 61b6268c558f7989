//! # pulsvakt-engine
//!
//! Runtime layer of the pulsvakt dashboard: the monitoring controller that
//! owns the periodic tick, the renderer seam consumed by whatever draws the
//! dashboard, and a deterministic simulation mode for reproducible runs.

mod engine;

pub use engine::{
    validate_digest, DashboardView, EngineError, Monitor, MonitorState, NullRenderer, RenderError,
    Renderer, Simulation,
};

pub mod prelude {
    pub use crate::{DashboardView, Monitor, MonitorState, Renderer, Simulation};
}
