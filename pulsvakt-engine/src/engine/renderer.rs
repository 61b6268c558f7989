//! Output seam between the engine and whatever draws the dashboard.
//!
//! The engine pushes a [`DashboardView`] after every tick and lifecycle
//! transition. A failing or absent renderer never fails an engine operation;
//! the caller logs and moves on.

use async_trait::async_trait;
use thiserror::Error;

use crate::engine::view::DashboardView;

/// Renderer failure conditions.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render target unavailable: {0}")]
    Unavailable(String),

    #[error("render I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait Renderer: Send + Sync {
    /// Consumes the current view. Called after each tick and transition.
    async fn render(&self, view: &DashboardView) -> Result<(), RenderError>;
}

/// Renderer that accepts and discards every frame.
pub struct NullRenderer;

#[async_trait]
impl Renderer for NullRenderer {
    async fn render(&self, _view: &DashboardView) -> Result<(), RenderError> {
        Ok(())
    }
}
