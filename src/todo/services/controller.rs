//! Controller mediating between the todo store and the view.

use super::ControllerConfig;
use crate::todo::{
    domain::{
        Filter, RenderInstruction, Todo, TodoChanges, TodoId, TodoQuery, TodoTitle, ViewEvent,
    },
    ports::{PresenterError, TodoPresenter, TodoStore, TodoStoreError},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, warn};

/// Controller-level errors.
///
/// The controller renders nothing for a step whose store call failed; the
/// error is handed back to whoever dispatched the event.
#[derive(Debug, Error)]
pub enum TodoControllerError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TodoStoreError),
    /// Presenter rejected an instruction.
    #[error(transparent)]
    Presenter(#[from] PresenterError),
}

/// Result type for controller operations.
pub type TodoControllerResult<T> = Result<T, TodoControllerError>;

/// Translates view events into store calls and store results into render
/// instructions.
///
/// The only state held here is the active [`Filter`], written exclusively
/// by [`TodoController::activate`]. Every render reflects the store after
/// the triggering call has completed.
pub struct TodoController<S, P>
where
    S: TodoStore,
    P: TodoPresenter,
{
    store: Arc<S>,
    presenter: Arc<P>,
    config: ControllerConfig,
    filter: RwLock<Filter>,
}

impl<S, P> TodoController<S, P>
where
    S: TodoStore,
    P: TodoPresenter,
{
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, presenter: Arc<P>) -> Self {
        Self::with_config(store, presenter, ControllerConfig::default())
    }

    /// Creates a controller with a custom configuration.
    #[must_use]
    pub fn with_config(store: Arc<S>, presenter: Arc<P>, config: ControllerConfig) -> Self {
        Self {
            store,
            presenter,
            config,
            filter: RwLock::new(Filter::All),
        }
    }

    /// Returns the controller configuration.
    #[must_use]
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the filter set by the most recent activation.
    pub async fn current_filter(&self) -> Filter {
        self.filter.read().await.clone()
    }

    /// Synchronises the view with a route.
    ///
    /// Renders the filtered entries, then the list summary, then the raw
    /// filter value for link highlighting.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store read or a render fails.
    pub async fn activate(&self, route: &str) -> TodoControllerResult<()> {
        let filter = Filter::from_route(route);
        debug!(route, filter = %filter, "activating route");
        *self.filter.write().await = filter.clone();

        self.show_entries(&filter).await?;
        self.refresh_summary().await?;
        self.render(RenderInstruction::SetFilter(filter.as_str().to_owned()))
            .await
    }

    /// Alias of [`TodoController::activate`] under the view-facing name.
    ///
    /// # Errors
    ///
    /// See [`TodoController::activate`].
    pub async fn set_view(&self, route: &str) -> TodoControllerResult<()> {
        self.activate(route).await
    }

    /// Dispatches a view event to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store call or a render fails.
    pub async fn handle(&self, event: ViewEvent) -> TodoControllerResult<()> {
        debug!(event = event.name(), "handling view event");
        match event {
            ViewEvent::NewTodo { title } => self.add_item(&title).await,
            ViewEvent::ItemRemove { id } => self.remove_item(id).await,
            ViewEvent::RemoveCompleted => self.remove_completed().await,
            ViewEvent::ItemToggle { id, completed } => self.toggle_item(id, completed).await,
            ViewEvent::ToggleAll { completed } => self.toggle_all(completed).await,
            ViewEvent::ItemEdit { id } => self.edit_item(id).await,
            ViewEvent::ItemEditDone { id, title } => self.edit_item_done(id, &title).await,
            ViewEvent::ItemEditCancel { id } => self.edit_item_cancel(id).await,
        }
    }

    /// Decodes and dispatches an untyped view event.
    ///
    /// Unknown events and payloads missing required fields are logged and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when the decoded event's handler
    /// fails.
    pub async fn handle_wire(&self, name: &str, payload: Value) -> TodoControllerResult<()> {
        match ViewEvent::from_wire(name, payload) {
            Ok(event) => self.handle(event).await,
            Err(err) => {
                warn!(event = name, error = %err, "ignoring malformed view event");
                Ok(())
            }
        }
    }

    /// Handles events from the view until every sender is dropped.
    ///
    /// A failing event is logged and does not stop the loop.
    pub async fn run(&self, mut events: mpsc::Receiver<ViewEvent>) {
        while let Some(event) = events.recv().await {
            let name = event.name();
            if let Err(err) = self.handle(event).await {
                warn!(event = name, error = %err, "view event failed");
            }
        }
        debug!("view event channel closed");
    }

    /// Creates a todo and re-renders the current filter's entries.
    ///
    /// Empty titles are ignored without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store call or a render fails.
    pub async fn add_item(&self, title: &str) -> TodoControllerResult<()> {
        let Some(accepted) = self.accept_title(title) else {
            debug!("ignoring empty new todo");
            return Ok(());
        };

        let created = self.store.create(accepted).await?;
        debug!(id = %created.id(), "todo created");

        let filter = self.current_filter().await;
        self.show_entries(&filter).await?;
        self.after_mutation().await?;
        self.render(RenderInstruction::ClearNewTodo).await
    }

    /// Removes a todo and updates the active counter.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store call or a render fails.
    pub async fn remove_item(&self, id: TodoId) -> TodoControllerResult<()> {
        self.store.remove(id).await?;
        self.render(RenderInstruction::RemoveItem(id)).await?;

        if self.config.refresh_summary_after_mutation {
            return self.refresh_summary().await;
        }
        let counts = self.store.count().await?;
        self.render(RenderInstruction::UpdateElementCount(counts.active))
            .await
    }

    /// Removes every completed todo one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store call or a render fails.
    pub async fn remove_completed(&self) -> TodoControllerResult<()> {
        let completed = self.store.read(TodoQuery::Completed(true)).await?;
        for todo in completed {
            let id = todo.id();
            self.store.remove(id).await?;
            self.render(RenderInstruction::RemoveItem(id)).await?;
        }
        self.after_mutation().await
    }

    /// Sets one todo's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store call or a render fails.
    pub async fn toggle_item(&self, id: TodoId, completed: bool) -> TodoControllerResult<()> {
        self.store
            .update(id, TodoChanges::completed(completed))
            .await?;
        self.render(RenderInstruction::ElementComplete { id, completed })
            .await?;
        self.after_mutation().await
    }

    /// Sets every todo's completion flag to the same value.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store call or a render fails.
    pub async fn toggle_all(&self, completed: bool) -> TodoControllerResult<()> {
        let todos = self.store.read(TodoQuery::All).await?;
        for todo in todos {
            let id = todo.id();
            self.store
                .update(id, TodoChanges::completed(completed))
                .await?;
            self.render(RenderInstruction::ElementComplete { id, completed })
                .await?;
        }
        self.after_mutation().await
    }

    /// Puts a todo into edit mode with its stored title.
    ///
    /// Unknown identifiers render nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when the store read or the render
    /// fails.
    pub async fn edit_item(&self, id: TodoId) -> TodoControllerResult<()> {
        let Some(todo) = self.find(id).await? else {
            debug!(%id, "edit requested for unknown todo");
            return Ok(());
        };
        self.render(RenderInstruction::EditItem {
            id,
            title: todo.title().to_owned(),
        })
        .await
    }

    /// Commits an inline edit; an empty title removes the todo instead.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when a store call or a render fails.
    pub async fn edit_item_done(&self, id: TodoId, title: &str) -> TodoControllerResult<()> {
        let Some(accepted) = self.accept_title(title) else {
            self.store.remove(id).await?;
            self.render(RenderInstruction::RemoveItem(id)).await?;
            return self.after_mutation().await;
        };

        self.store
            .update(id, TodoChanges::title(accepted.as_str()))
            .await?;
        self.render(RenderInstruction::EditItemDone {
            id,
            title: accepted.into_inner(),
        })
        .await
    }

    /// Abandons an inline edit, restoring the stored title.
    ///
    /// Unknown identifiers render nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TodoControllerError`] when the store read or the render
    /// fails.
    pub async fn edit_item_cancel(&self, id: TodoId) -> TodoControllerResult<()> {
        let Some(todo) = self.find(id).await? else {
            debug!(%id, "edit cancelled for unknown todo");
            return Ok(());
        };
        self.render(RenderInstruction::EditItemDone {
            id,
            title: todo.title().to_owned(),
        })
        .await
    }

    fn accept_title(&self, title: &str) -> Option<TodoTitle> {
        let accepted = if self.config.trim_titles {
            TodoTitle::new(title)
        } else {
            TodoTitle::verbatim(title)
        };
        accepted.ok()
    }

    async fn find(&self, id: TodoId) -> TodoControllerResult<Option<Todo>> {
        let matches = self.store.read(TodoQuery::Id(id)).await?;
        Ok(matches.into_iter().find(|todo| todo.id() == id))
    }

    async fn show_entries(&self, filter: &Filter) -> TodoControllerResult<()> {
        let todos = self.store.read(filter.query()).await?;
        self.render(RenderInstruction::ShowEntries(todos)).await
    }

    async fn refresh_summary(&self) -> TodoControllerResult<()> {
        let counts = self.store.count().await?;
        for instruction in RenderInstruction::summary(counts) {
            self.render(instruction).await?;
        }
        Ok(())
    }

    async fn after_mutation(&self) -> TodoControllerResult<()> {
        if self.config.refresh_summary_after_mutation {
            self.refresh_summary().await?;
        }
        Ok(())
    }

    async fn render(&self, instruction: RenderInstruction) -> TodoControllerResult<()> {
        debug!(instruction = instruction.name(), "render");
        self.presenter.render(instruction).await?;
        Ok(())
    }
}
