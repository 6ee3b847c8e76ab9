//! In-memory todo store for tests and local sessions.

use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoChanges, TodoCounts, TodoId, TodoQuery, TodoTitle},
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};
use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory todo store.
///
/// Todos are kept in insertion order and identifiers are assigned from a
/// monotonically increasing counter starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryTodoStore<C: Clock + Send + Sync = DefaultClock> {
    state: Arc<RwLock<InMemoryTodoState>>,
    clock: C,
}

#[derive(Debug)]
struct InMemoryTodoState {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for InMemoryTodoState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: TodoId::new(1),
        }
    }
}

impl InMemoryTodoStore<DefaultClock> {
    /// Creates an empty store stamping todos with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }
}

impl Default for InMemoryTodoStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Send + Sync> InMemoryTodoStore<C> {
    /// Creates an empty store with the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTodoState::default())),
            clock,
        }
    }

    /// Inserts a todo with a caller-chosen identifier.
    ///
    /// Later creations receive identifiers above every seeded one.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::DuplicateTodo`] when the identifier is
    /// taken, or a persistence error when lock acquisition fails.
    pub fn seed(
        &self,
        id: TodoId,
        title: impl Into<String>,
        completed: bool,
    ) -> TodoStoreResult<Todo> {
        let mut state = self.write_state()?;
        if state.todos.iter().any(|todo| todo.id() == id) {
            return Err(TodoStoreError::DuplicateTodo(id));
        }

        let todo = Todo::from_persisted(PersistedTodoData {
            id,
            title: title.into(),
            completed,
            created_at: self.clock.utc(),
        });
        if id >= state.next_id {
            state.next_id = id.next();
        }
        state.todos.push(todo.clone());
        Ok(todo)
    }

    /// Returns a snapshot of every stored todo.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn snapshot(&self) -> TodoStoreResult<Vec<Todo>> {
        Ok(self.read_state()?.todos.clone())
    }

    fn read_state(&self) -> TodoStoreResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state
            .read()
            .map_err(|err| TodoStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TodoStoreResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state
            .write()
            .map_err(|err| TodoStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TodoStore for InMemoryTodoStore<C> {
    async fn read(&self, query: TodoQuery) -> TodoStoreResult<Vec<Todo>> {
        let state = self.read_state()?;
        Ok(state
            .todos
            .iter()
            .filter(|todo| query.matches(todo))
            .cloned()
            .collect())
    }

    async fn count(&self) -> TodoStoreResult<TodoCounts> {
        let state = self.read_state()?;
        Ok(TodoCounts::tally(&state.todos))
    }

    async fn create(&self, title: TodoTitle) -> TodoStoreResult<Todo> {
        let mut state = self.write_state()?;
        let id = state.next_id;
        state.next_id = id.next();
        let todo = Todo::new(id, title, &self.clock);
        state.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, changes: TodoChanges) -> TodoStoreResult<()> {
        let mut state = self.write_state()?;
        let todo = state
            .todos
            .iter_mut()
            .find(|todo| todo.id() == id)
            .ok_or(TodoStoreError::NotFound(id))?;
        todo.apply(&changes);
        Ok(())
    }

    async fn remove(&self, id: TodoId) -> TodoStoreResult<()> {
        let mut state = self.write_state()?;
        let position = state
            .todos
            .iter()
            .position(|todo| todo.id() == id)
            .ok_or(TodoStoreError::NotFound(id))?;
        state.todos.remove(position);
        Ok(())
    }
}
