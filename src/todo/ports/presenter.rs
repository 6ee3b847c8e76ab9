//! Presenter port receiving render instructions.

use crate::todo::domain::{RenderInstruction, TodoDomainError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for presenter operations.
pub type PresenterResult<T> = Result<T, PresenterError>;

/// Render instruction sink implemented by views.
#[async_trait]
pub trait TodoPresenter: Send + Sync {
    /// Applies a single render instruction.
    async fn render(&self, instruction: RenderInstruction) -> PresenterResult<()>;
}

/// Errors returned by presenter implementations.
#[derive(Debug, Clone, Error)]
pub enum PresenterError {
    /// The instruction asks for a view transition the view does not allow.
    #[error(transparent)]
    Rejected(#[from] TodoDomainError),

    /// The view could not be written to.
    #[error("presenter unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl PresenterError {
    /// Wraps an output failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
