//! Store port for todo persistence.

use crate::todo::domain::{Todo, TodoChanges, TodoCounts, TodoId, TodoQuery, TodoTitle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;

/// Asynchronous todo persistence contract.
///
/// A returned future resolving is the store's completion notification: the
/// controller renders only after the awaited operation has been applied.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns the todos matching the query, in store order.
    async fn read(&self, query: TodoQuery) -> TodoStoreResult<Vec<Todo>>;

    /// Returns todo counts grouped by status.
    async fn count(&self) -> TodoStoreResult<TodoCounts>;

    /// Persists a new, incomplete todo and returns it with its assigned
    /// identifier.
    async fn create(&self, title: TodoTitle) -> TodoStoreResult<Todo>;

    /// Applies a partial update to an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::NotFound`] when the todo does not exist.
    async fn update(&self, id: TodoId, changes: TodoChanges) -> TodoStoreResult<()>;

    /// Removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::NotFound`] when the todo does not exist.
    async fn remove(&self, id: TodoId) -> TodoStoreResult<()>;
}

/// Errors returned by todo store implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoStoreError {
    /// A todo with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    DuplicateTodo(TodoId),

    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
