use crate::viz::types::ContainerId;
use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Failures reported by a charting backend. The renderer and the toggle controller
/// pass these through untouched.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("container {0} already holds a live chart")]
    ContainerBusy(ContainerId),

    #[error("invalid container {0:?}")]
    InvalidContainer(String),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
