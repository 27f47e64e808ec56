//! Pane records and identifiers.
//!
//! The actual text buffer lives in the editor component hosted by the
//! rendering layer. This crate tracks ids and per-pane metadata only.

use serde::{Deserialize, Serialize};

use crate::config::EditorPreferences;

/// Unique identifier for a pane (monotonic counter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaneId(pub u64);

/// Unique identifier for the visual tab hosting a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub u64);

/// Filesystem metadata captured when a pane is opened from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// File size in bytes.
    pub size: u64,
    /// Modification time as seconds since the Unix epoch.
    pub modified: u64,
    /// Whether the path refers to a directory.
    pub is_directory: bool,
}

/// A single editor tab/buffer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    /// Unique pane identifier.
    pub id: PaneId,
    /// Identifier of the visual tab grouping.
    pub tab_id: TabId,
    /// Display name shown on the tab.
    pub label: String,
    /// Path backing this pane; `None` for unsaved new files.
    pub filename: Option<String>,
    /// Syntax-highlighting mode identifier.
    pub mode: String,
    /// Whether this pane receives keyboard/edit input.
    pub has_focus: bool,
    /// Whether the buffer holds edits not yet written to disk.
    pub has_unsaved_changes: bool,
    /// Key-binding set copied from the editor preferences.
    pub key_bindings: String,
    /// Spaces per tab stop copied from the editor preferences.
    pub tab_spaces: u32,
    /// Font size copied from the editor preferences.
    pub font_size: u32,
    /// Color theme copied from the editor preferences.
    pub theme: String,
    /// UI icon identifier.
    pub icon: String,
    /// Whether the UI permits closing this pane.
    pub is_closeable: bool,
    /// Filesystem metadata, present only when opened from an existing file.
    pub stats: Option<FileStats>,
}

impl Pane {
    /// Create a new focused pane seeded from the given preferences.
    pub fn new(id: PaneId, tab_id: TabId, prefs: &EditorPreferences) -> Self {
        Self {
            id,
            tab_id,
            label: "New File".into(),
            filename: None,
            mode: "python".into(),
            has_focus: true,
            has_unsaved_changes: false,
            key_bindings: prefs.key_bindings.clone(),
            tab_spaces: prefs.tab_spaces,
            font_size: prefs.font_size,
            theme: prefs.theme.clone(),
            icon: "file-code-o".into(),
            is_closeable: true,
            stats: None,
        }
    }
}

/// Derive a tab label from a filename: the last path segment, accepting
/// both `/` and `\` as separators.
pub fn label_from_filename(filename: &str) -> String {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename).to_string()
}
