//! Error types for todo domain validation and view event decoding.

use super::{EditState, TodoId};
use thiserror::Error;

/// Errors returned while constructing or transitioning domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo title is empty (after trimming, when trimming applies).
    #[error("todo title must not be empty")]
    EmptyTitle,

    /// The requested edit-mode transition is not permitted.
    #[error("todo {id} cannot leave {from} via {action}")]
    InvalidEditTransition {
        /// Todo whose view-local edit state was addressed.
        id: TodoId,
        /// Edit state at the time of the request.
        from: EditState,
        /// Attempted action.
        action: &'static str,
    },
}

/// Errors returned while decoding an untyped view event.
#[derive(Debug, Error)]
pub enum ViewEventError {
    /// The event name is not one the controller binds.
    #[error("unknown view event: {0}")]
    UnknownEvent(String),

    /// The payload is missing fields the event requires.
    #[error("malformed payload for view event {event}: {source}")]
    MalformedPayload {
        /// Canonical event name.
        event: &'static str,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
}
