//! Todo record, partial updates, store queries and status counts.

use super::{TodoId, TodoTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, incomplete todo with a store-assigned identifier.
    #[must_use]
    pub fn new(id: TodoId, title: TodoTitle, clock: &impl Clock) -> Self {
        Self {
            id,
            title: title.into_inner(),
            completed: false,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the todo is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a partial update. Only stores call this.
    pub fn apply(&mut self, changes: &TodoChanges) {
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(title) = &changes.title {
            self.title.clone_from(title);
        }
    }
}

/// Partial todo update handed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoChanges {
    /// New completion flag, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// New title, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TodoChanges {
    /// Changes only the completion flag.
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            title: None,
        }
    }

    /// Changes only the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            completed: None,
            title: Some(title.into()),
        }
    }
}

/// Predicate used to read todos from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoQuery {
    /// Every todo.
    All,
    /// Todos whose completion flag equals the value.
    Completed(bool),
    /// The todo with the given identifier.
    Id(TodoId),
}

impl TodoQuery {
    /// Returns whether the todo satisfies the query.
    #[must_use]
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Completed(completed) => todo.completed() == completed,
            Self::Id(id) => todo.id() == id,
        }
    }
}

/// Todo counts grouped by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCounts {
    /// Incomplete todos.
    pub active: usize,
    /// Completed todos.
    pub completed: usize,
    /// All todos.
    pub total: usize,
}

impl TodoCounts {
    /// Counts the given todos by status.
    #[must_use]
    pub fn tally<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Self {
        todos.into_iter().fold(Self::default(), |mut counts, todo| {
            if todo.completed() {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            counts.total += 1;
            counts
        })
    }

    /// Returns whether the list holds at least one todo.
    #[must_use]
    pub const fn has_todos(self) -> bool {
        self.total > 0
    }

    /// Returns whether every todo is completed and at least one exists.
    #[must_use]
    pub const fn all_completed(self) -> bool {
        self.total > 0 && self.active == 0
    }
}
