//! Inbound view events and their untyped wire decoding.

use super::{TodoId, ViewEventError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A user-interface event the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Submit the new-todo input.
    NewTodo {
        /// Raw input text.
        title: String,
    },
    /// Destroy a single todo.
    ItemRemove {
        /// Target todo.
        id: TodoId,
    },
    /// Destroy every completed todo.
    RemoveCompleted,
    /// Tick or untick a single todo.
    ItemToggle {
        /// Target todo.
        id: TodoId,
        /// Requested completion flag.
        completed: bool,
    },
    /// Set every todo to the same completion flag.
    ToggleAll {
        /// Requested completion flag.
        completed: bool,
    },
    /// Enter edit mode for a todo.
    ItemEdit {
        /// Target todo.
        id: TodoId,
    },
    /// Commit an inline edit.
    ItemEditDone {
        /// Target todo.
        id: TodoId,
        /// Edited title, possibly empty.
        title: String,
    },
    /// Abandon an inline edit.
    ItemEditCancel {
        /// Target todo.
        id: TodoId,
    },
}

#[derive(Deserialize)]
struct IdPayload {
    id: TodoId,
}

#[derive(Deserialize)]
struct TogglePayload {
    id: TodoId,
    completed: bool,
}

#[derive(Deserialize)]
struct CompletedPayload {
    completed: bool,
}

#[derive(Deserialize)]
struct EditDonePayload {
    id: TodoId,
    title: String,
}

impl ViewEvent {
    /// Event names the controller binds, in declaration order.
    pub const NAMES: [&'static str; 8] = [
        "newTodo",
        "itemRemove",
        "removeCompleted",
        "itemToggle",
        "toggleAll",
        "itemEdit",
        "itemEditDone",
        "itemEditCancel",
    ];

    /// Returns the event name as the view emits it.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NewTodo { .. } => "newTodo",
            Self::ItemRemove { .. } => "itemRemove",
            Self::RemoveCompleted => "removeCompleted",
            Self::ItemToggle { .. } => "itemToggle",
            Self::ToggleAll { .. } => "toggleAll",
            Self::ItemEdit { .. } => "itemEdit",
            Self::ItemEditDone { .. } => "itemEditDone",
            Self::ItemEditCancel { .. } => "itemEditCancel",
        }
    }

    /// Decodes an event from its name and untyped payload.
    ///
    /// `newTodo` carries the title as a bare string; `removeCompleted`
    /// ignores its payload. Every other event carries an object.
    ///
    /// # Errors
    ///
    /// Returns [`ViewEventError::UnknownEvent`] for names outside
    /// [`ViewEvent::NAMES`] and [`ViewEventError::MalformedPayload`] when a
    /// required field is missing or has the wrong type.
    pub fn from_wire(name: &str, payload: Value) -> Result<Self, ViewEventError> {
        match name {
            "newTodo" => {
                let title: String = decode("newTodo", payload)?;
                Ok(Self::NewTodo { title })
            }
            "itemRemove" => {
                let IdPayload { id } = decode("itemRemove", payload)?;
                Ok(Self::ItemRemove { id })
            }
            "removeCompleted" => Ok(Self::RemoveCompleted),
            "itemToggle" => {
                let TogglePayload { id, completed } = decode("itemToggle", payload)?;
                Ok(Self::ItemToggle { id, completed })
            }
            "toggleAll" => {
                let CompletedPayload { completed } = decode("toggleAll", payload)?;
                Ok(Self::ToggleAll { completed })
            }
            "itemEdit" => {
                let IdPayload { id } = decode("itemEdit", payload)?;
                Ok(Self::ItemEdit { id })
            }
            "itemEditDone" => {
                let EditDonePayload { id, title } = decode("itemEditDone", payload)?;
                Ok(Self::ItemEditDone { id, title })
            }
            "itemEditCancel" => {
                let IdPayload { id } = decode("itemEditCancel", payload)?;
                Ok(Self::ItemEditCancel { id })
            }
            other => Err(ViewEventError::UnknownEvent(other.to_owned())),
        }
    }
}

fn decode<T: DeserializeOwned>(event: &'static str, payload: Value) -> Result<T, ViewEventError> {
    serde_json::from_value(payload)
        .map_err(|source| ViewEventError::MalformedPayload { event, source })
}
