mod error;
mod monitor;
mod renderer;
mod sim;
mod view;

pub use self::{
    error::EngineError,
    monitor::{Monitor, MonitorState},
    renderer::{NullRenderer, RenderError, Renderer},
    sim::{validate_digest, Simulation},
    view::DashboardView,
};
