//! In-memory adapters for the todo store and presenter ports.

mod presenter;
mod store;
mod view_model;

pub use presenter::RecordingPresenter;
pub use store::InMemoryTodoStore;
pub use view_model::{ViewEntry, ViewModel, ViewModelPresenter};
