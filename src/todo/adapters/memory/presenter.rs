//! Presenter that records every render instruction it receives.

use crate::todo::{
    domain::RenderInstruction,
    ports::{PresenterError, PresenterResult, TodoPresenter},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory presenter keeping an ordered log of instructions.
///
/// Clones share the same log, so a test can hand one clone to the
/// controller and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    log: Arc<RwLock<Vec<RenderInstruction>>>,
}

impl RecordingPresenter {
    /// Creates a presenter with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded instructions in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::Unavailable`] when lock acquisition fails.
    pub fn instructions(&self) -> PresenterResult<Vec<RenderInstruction>> {
        let log = self
            .log
            .read()
            .map_err(|err| PresenterError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(log.clone())
    }

    /// Returns whether an identical instruction has been recorded.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::Unavailable`] when lock acquisition fails.
    pub fn contains(&self, instruction: &RenderInstruction) -> PresenterResult<bool> {
        Ok(self.instructions()?.contains(instruction))
    }

    /// Returns the recorded instructions with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::Unavailable`] when lock acquisition fails.
    pub fn named(&self, name: &str) -> PresenterResult<Vec<RenderInstruction>> {
        Ok(self
            .instructions()?
            .into_iter()
            .filter(|instruction| instruction.name() == name)
            .collect())
    }

    /// Discards every recorded instruction.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::Unavailable`] when lock acquisition fails.
    pub fn clear(&self) -> PresenterResult<()> {
        self.log
            .write()
            .map_err(|err| PresenterError::unavailable(std::io::Error::other(err.to_string())))?
            .clear();
        Ok(())
    }
}

#[async_trait]
impl TodoPresenter for RecordingPresenter {
    async fn render(&self, instruction: RenderInstruction) -> PresenterResult<()> {
        self.log
            .write()
            .map_err(|err| PresenterError::unavailable(std::io::Error::other(err.to_string())))?
            .push(instruction);
        Ok(())
    }
}
