//! Error types for the pane registry crate.

/// Errors that can occur while applying pane transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaneError {
    /// The referenced pane does not exist in the registry.
    #[error("pane not found: {0}")]
    PaneNotFound(u64),

    /// No pane currently holds focus.
    #[error("no pane currently holds focus")]
    NoFocusedPane,
}

/// Convenience type alias for pane registry results.
pub type PaneResult<T> = Result<T, PaneError>;
