//! Port contracts consumed by the todo controller.
//!
//! Ports define infrastructure-agnostic interfaces for persistence and
//! rendering.

mod presenter;
mod store;

pub use presenter::{PresenterError, PresenterResult, TodoPresenter};
pub use store::{TodoStore, TodoStoreError, TodoStoreResult};
