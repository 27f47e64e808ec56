//! Pane event definitions.
//!
//! Events arrive from the UI layer as internally tagged JSON objects
//! (`{"type": "ADD_FILE", ...}`), so the enum keeps the wire names used
//! by the dispatch layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pane::{FileStats, PaneId};

/// An event dispatched to the pane registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaneEvent {
    /// Open a new pane, optionally backed by a file on disk.
    AddFile {
        /// Path of the file to open; `None` creates an empty buffer.
        filename: Option<String>,
        /// Metadata of the backing file, when already stat'ed.
        stats: Option<FileStats>,
    },
    /// Close the pane with the given id.
    CloseFile {
        /// Target pane.
        id: PaneId,
    },
    /// Give focus to the pane with the given id.
    FocusFile {
        /// Target pane.
        id: PaneId,
    },
    /// Clear the unsaved-changes marker after a successful save.
    FileIsSaved {
        /// Target pane.
        id: PaneId,
    },
    /// Mark the pane as holding unsaved edits.
    FileHasChanges {
        /// Target pane.
        id: PaneId,
    },
    /// Close whichever pane currently holds focus.
    CloseActiveFile,
    /// A split-pane divider is being dragged; panes need relayout.
    SplitPaneDrag,
    /// Move focus one pane to the right.
    MoveOneRight,
    /// Move focus one pane to the left.
    MoveOneLeft,
    /// Apply a changed editor preference to every pane.
    ChangePreference {
        /// Preference key as named by the settings store.
        key: String,
        /// New value; numeric preferences may arrive as strings.
        value: Value,
    },
}
