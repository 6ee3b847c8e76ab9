//! Shared test helpers for in-memory todo controller integration tests.

use std::sync::Arc;

use rstest::fixture;
use todo_controller::todo::{
    adapters::memory::{InMemoryTodoStore, RecordingPresenter},
    domain::{Todo, TodoId},
    ports::TodoStoreResult,
    services::TodoController,
};

/// Controller type used across integration tests.
pub type TestController = TodoController<InMemoryTodoStore, RecordingPresenter>;

/// Store, presenter and controller wired together.
pub struct Harness {
    /// Backing store shared with the controller.
    pub store: Arc<InMemoryTodoStore>,
    /// Presenter clone sharing the controller's instruction log.
    pub presenter: RecordingPresenter,
    /// Controller under test.
    pub controller: Arc<TestController>,
}

/// Provides a fresh harness over an empty store.
#[fixture]
pub fn harness() -> Harness {
    let store = Arc::new(InMemoryTodoStore::new());
    let presenter = RecordingPresenter::new();
    let controller = Arc::new(TodoController::new(
        store.clone(),
        Arc::new(presenter.clone()),
    ));
    Harness {
        store,
        presenter,
        controller,
    }
}

/// Seeds the store with `(id, title, completed)` rows in order.
///
/// # Errors
///
/// Returns an error if any identifier is already taken.
pub fn seed(store: &InMemoryTodoStore, rows: &[(u64, &str, bool)]) -> TodoStoreResult<Vec<Todo>> {
    rows.iter()
        .map(|&(id, title, completed)| store.seed(TodoId::new(id), title, completed))
        .collect()
}
