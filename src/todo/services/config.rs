//! Controller configuration.

/// Tunables for [`super::TodoController`].
///
/// # Examples
///
/// ```
/// use todo_controller::todo::services::ControllerConfig;
///
/// let config = ControllerConfig::default();
/// assert!(config.trim_titles);
/// assert!(!config.refresh_summary_after_mutation);
///
/// let original = ControllerConfig::original();
/// assert!(original.refresh_summary_after_mutation);
///
/// let verbatim = ControllerConfig::default().with_trim_titles(false);
/// assert!(!verbatim.trim_titles);
/// assert_eq!(verbatim.with_summary_refresh(true).with_trim_titles(true), original);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Trim titles before the emptiness check and before persisting.
    ///
    /// When disabled only the empty string counts as empty.
    pub trim_titles: bool,
    /// Re-render the list summary (element count, content block, toggle-all
    /// and clear-completed) after every create, toggle and removal.
    pub refresh_summary_after_mutation: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            trim_titles: true,
            refresh_summary_after_mutation: false,
        }
    }
}

impl ControllerConfig {
    /// Creates a configuration that refreshes the summary after every
    /// mutation, the way a full TodoMVC view expects.
    #[must_use]
    pub const fn original() -> Self {
        Self {
            trim_titles: true,
            refresh_summary_after_mutation: true,
        }
    }

    /// Sets whether titles are trimmed.
    #[must_use]
    pub const fn with_trim_titles(mut self, trim_titles: bool) -> Self {
        self.trim_titles = trim_titles;
        self
    }

    /// Sets whether the summary is refreshed after mutations.
    #[must_use]
    pub const fn with_summary_refresh(mut self, refresh: bool) -> Self {
        self.refresh_summary_after_mutation = refresh;
        self
    }
}
