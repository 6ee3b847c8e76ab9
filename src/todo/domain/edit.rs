//! View-local edit mode state machine for a single todo.

use super::{TodoDomainError, TodoId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a todo is displayed or being edited inline.
///
/// `Display -> Editing` on `itemEdit`; `Editing -> Display` on
/// `itemEditDone` or `itemEditCancel`. No other transitions exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditState {
    /// Shown as a regular list entry.
    #[default]
    Display,
    /// Shown as an inline editor.
    Editing,
}

impl EditState {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Editing => "editing",
        }
    }

    /// Enters edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidEditTransition`] when already
    /// editing.
    pub const fn begin_edit(self, id: TodoId) -> Result<Self, TodoDomainError> {
        match self {
            Self::Display => Ok(Self::Editing),
            Self::Editing => Err(TodoDomainError::InvalidEditTransition {
                id,
                from: self,
                action: "begin_edit",
            }),
        }
    }

    /// Leaves edit mode, whether the edit was committed or cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidEditTransition`] when not editing.
    pub const fn finish_edit(self, id: TodoId) -> Result<Self, TodoDomainError> {
        match self {
            Self::Editing => Ok(Self::Display),
            Self::Display => Err(TodoDomainError::InvalidEditTransition {
                id,
                from: self,
                action: "finish_edit",
            }),
        }
    }

    /// Checks that the todo may be removed directly.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidEditTransition`] while editing; an
    /// entry being edited leaves only by finishing or cancelling the edit.
    pub const fn allow_remove(self, id: TodoId) -> Result<(), TodoDomainError> {
        match self {
            Self::Display => Ok(()),
            Self::Editing => Err(TodoDomainError::InvalidEditTransition {
                id,
                from: self,
                action: "remove",
            }),
        }
    }
}

impl fmt::Display for EditState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
