//! Shared world state for todo controller BDD scenarios.

use std::sync::Arc;

use eyre::eyre;
use rstest::fixture;
use todo_controller::todo::{
    adapters::memory::{InMemoryTodoStore, ViewModelPresenter},
    domain::TodoId,
    services::{ControllerConfig, TodoController, TodoControllerError},
};

/// Controller type used by the BDD world.
pub type TestController = TodoController<InMemoryTodoStore, ViewModelPresenter>;

/// Scenario world for todo controller behaviour tests.
pub struct TodoWorld {
    pub store: Arc<InMemoryTodoStore>,
    pub view: ViewModelPresenter,
    pub controller: TestController,
    pub next_seed_id: u64,
    pub last_result: Option<Result<(), TodoControllerError>>,
}

impl TodoWorld {
    /// Creates a world over an empty store and headless view.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTodoStore::new());
        let view = ViewModelPresenter::new();
        let controller = TodoController::with_config(
            store.clone(),
            Arc::new(view.clone()),
            ControllerConfig::original(),
        );

        Self {
            store,
            view,
            controller,
            next_seed_id: 1,
            last_result: None,
        }
    }

    /// Finds the stored todo with the given title.
    pub fn id_of(&self, title: &str) -> Result<TodoId, eyre::Report> {
        self.store
            .snapshot()?
            .iter()
            .find(|todo| todo.title() == title)
            .map(|todo| todo.id())
            .ok_or_else(|| eyre!("no stored todo titled {title:?}"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
