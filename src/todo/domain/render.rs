//! Render instructions issued by the controller to the presenter.

use super::{Todo, TodoCounts, TodoId};
use serde::{Deserialize, Serialize};

/// A named, payload-carrying directive describing what the view shows next.
///
/// Serialises as `{"instruction": "<name>", "payload": <payload>}`; the
/// payload is omitted for [`RenderInstruction::ClearNewTodo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "instruction", content = "payload", rename_all = "camelCase")]
pub enum RenderInstruction {
    /// Replace the visible list with these todos, in store order.
    ShowEntries(Vec<Todo>),
    /// Show or hide the main content block.
    ContentBlockVisibility {
        /// Whether any todo exists.
        visible: bool,
    },
    /// Check or uncheck the toggle-all control.
    ToggleAll {
        /// Whether every todo is completed.
        checked: bool,
    },
    /// Update the clear-completed button.
    ClearCompletedButton {
        /// Number of completed todos.
        completed: usize,
        /// Whether the button is shown.
        visible: bool,
    },
    /// Highlight the filter link for this raw filter value.
    SetFilter(String),
    /// Mark a single todo complete or incomplete.
    ElementComplete {
        /// Affected todo.
        id: TodoId,
        /// New completion flag.
        completed: bool,
    },
    /// Remove a todo from the list.
    RemoveItem(TodoId),
    /// Update the "items left" counter.
    UpdateElementCount(usize),
    /// Enter edit mode for a todo.
    EditItem {
        /// Edited todo.
        id: TodoId,
        /// Current title.
        title: String,
    },
    /// Leave edit mode, displaying the given title.
    EditItemDone {
        /// Edited todo.
        id: TodoId,
        /// Title to display.
        title: String,
    },
    /// Reset the new-todo input.
    ClearNewTodo,
}

impl RenderInstruction {
    /// Returns the instruction name as the view knows it.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ShowEntries(_) => "showEntries",
            Self::ContentBlockVisibility { .. } => "contentBlockVisibility",
            Self::ToggleAll { .. } => "toggleAll",
            Self::ClearCompletedButton { .. } => "clearCompletedButton",
            Self::SetFilter(_) => "setFilter",
            Self::ElementComplete { .. } => "elementComplete",
            Self::RemoveItem(_) => "removeItem",
            Self::UpdateElementCount(_) => "updateElementCount",
            Self::EditItem { .. } => "editItem",
            Self::EditItemDone { .. } => "editItemDone",
            Self::ClearNewTodo => "clearNewTodo",
        }
    }

    /// Builds the summary instructions for the given counts.
    ///
    /// Order: element count, content block, toggle-all, clear-completed.
    #[must_use]
    pub const fn summary(counts: TodoCounts) -> [Self; 4] {
        [
            Self::UpdateElementCount(counts.active),
            Self::ContentBlockVisibility {
                visible: counts.has_todos(),
            },
            Self::ToggleAll {
                checked: counts.all_completed(),
            },
            Self::ClearCompletedButton {
                completed: counts.completed,
                visible: counts.completed > 0,
            },
        ]
    }
}
