//! Headless view that folds render instructions into a view model.

use crate::todo::{
    domain::{EditState, RenderInstruction, Todo, TodoDomainError, TodoId, ViewEvent},
    ports::{PresenterError, PresenterResult, TodoPresenter},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// A visible list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    id: TodoId,
    title: String,
    completed: bool,
    edit_state: EditState,
}

impl ViewEntry {
    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the displayed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the entry is ticked.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the entry's edit mode.
    #[must_use]
    pub const fn edit_state(&self) -> EditState {
        self.edit_state
    }
}

impl From<&Todo> for ViewEntry {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_owned(),
            completed: todo.completed(),
            edit_state: EditState::Display,
        }
    }
}

/// Everything a todo list view displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    entries: Vec<ViewEntry>,
    filter: String,
    active_count: usize,
    content_visible: bool,
    toggle_all_checked: bool,
    completed_count: usize,
    clear_completed_visible: bool,
    input_resets: usize,
}

impl ViewModel {
    /// Returns the visible entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// Returns the visible entry with the given identifier.
    #[must_use]
    pub fn entry(&self, id: TodoId) -> Option<&ViewEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the highlighted filter value.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns the "items left" counter.
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active_count
    }

    /// Returns whether the main content block is shown.
    #[must_use]
    pub const fn content_visible(&self) -> bool {
        self.content_visible
    }

    /// Returns whether the toggle-all control is checked.
    #[must_use]
    pub const fn toggle_all_checked(&self) -> bool {
        self.toggle_all_checked
    }

    /// Returns the count shown on the clear-completed button.
    #[must_use]
    pub const fn completed_count(&self) -> usize {
        self.completed_count
    }

    /// Returns whether the clear-completed button is shown.
    #[must_use]
    pub const fn clear_completed_visible(&self) -> bool {
        self.clear_completed_visible
    }

    /// Returns how many times the new-todo input was reset.
    #[must_use]
    pub const fn input_resets(&self) -> usize {
        self.input_resets
    }

    /// Applies a render instruction.
    ///
    /// Instructions addressing entries outside the visible list are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidEditTransition`] when an edit
    /// instruction does not match the entry's edit mode.
    pub fn apply(&mut self, instruction: RenderInstruction) -> Result<(), TodoDomainError> {
        match instruction {
            RenderInstruction::ShowEntries(todos) => {
                self.entries = todos.iter().map(ViewEntry::from).collect();
            }
            RenderInstruction::ContentBlockVisibility { visible } => {
                self.content_visible = visible;
            }
            RenderInstruction::ToggleAll { checked } => self.toggle_all_checked = checked,
            RenderInstruction::ClearCompletedButton { completed, visible } => {
                self.completed_count = completed;
                self.clear_completed_visible = visible;
            }
            RenderInstruction::SetFilter(filter) => self.filter = filter,
            RenderInstruction::ElementComplete { id, completed } => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.completed = completed;
                }
            }
            RenderInstruction::RemoveItem(id) => self.entries.retain(|entry| entry.id != id),
            RenderInstruction::UpdateElementCount(active) => self.active_count = active,
            RenderInstruction::EditItem { id, title } => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.edit_state = entry.edit_state.begin_edit(id)?;
                    entry.title = title;
                }
            }
            RenderInstruction::EditItemDone { id, title } => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.edit_state = entry.edit_state.finish_edit(id)?;
                    entry.title = title;
                }
            }
            RenderInstruction::ClearNewTodo => self.input_resets += 1,
        }
        Ok(())
    }

    /// Checks that the view may emit `event` given the entries' edit modes.
    ///
    /// `itemRemove` is refused for an entry being edited; edit events must
    /// follow the display/editing cycle. Events for entries outside the
    /// visible list pass.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidEditTransition`] when the event
    /// does not fit the addressed entry's edit mode.
    pub fn permits(&self, event: &ViewEvent) -> Result<(), TodoDomainError> {
        let state_of = |id: TodoId| self.entry(id).map(ViewEntry::edit_state);
        match event {
            ViewEvent::ItemRemove { id } => {
                state_of(*id).map_or(Ok(()), |state| state.allow_remove(*id))
            }
            ViewEvent::ItemEdit { id } => {
                state_of(*id).map_or(Ok(()), |state| state.begin_edit(*id).map(drop))
            }
            ViewEvent::ItemEditDone { id, .. } | ViewEvent::ItemEditCancel { id } => {
                state_of(*id).map_or(Ok(()), |state| state.finish_edit(*id).map(drop))
            }
            ViewEvent::NewTodo { .. }
            | ViewEvent::RemoveCompleted
            | ViewEvent::ItemToggle { .. }
            | ViewEvent::ToggleAll { .. } => Ok(()),
        }
    }

    fn entry_mut(&mut self, id: TodoId) -> Option<&mut ViewEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}

/// Presenter backed by a shared [`ViewModel`].
#[derive(Debug, Clone, Default)]
pub struct ViewModelPresenter {
    model: Arc<RwLock<ViewModel>>,
}

impl ViewModelPresenter {
    /// Creates a presenter over an empty view model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current view model.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::Unavailable`] when lock acquisition fails.
    pub fn snapshot(&self) -> PresenterResult<ViewModel> {
        let model = self
            .model
            .read()
            .map_err(|err| PresenterError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(model.clone())
    }

    /// Checks an outgoing event against the current view model.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::Rejected`] when the event breaks the edit
    /// cycle, or [`PresenterError::Unavailable`] when lock acquisition fails.
    pub fn permits(&self, event: &ViewEvent) -> PresenterResult<()> {
        let model = self
            .model
            .read()
            .map_err(|err| PresenterError::unavailable(std::io::Error::other(err.to_string())))?;
        model.permits(event)?;
        Ok(())
    }
}

#[async_trait]
impl TodoPresenter for ViewModelPresenter {
    async fn render(&self, instruction: RenderInstruction) -> PresenterResult<()> {
        debug!(instruction = instruction.name(), "applying to view model");
        let mut model = self
            .model
            .write()
            .map_err(|err| PresenterError::unavailable(std::io::Error::other(err.to_string())))?;
        model.apply(instruction)?;
        Ok(())
    }
}
