//! Editor preference schema.
//!
//! Preferences are resolved once by the embedding application (from its
//! settings store) and passed explicitly into the registry, which copies
//! them into every newly created pane.

use serde::{Deserialize, Serialize};

/// Per-pane editor preferences seeded at pane creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    /// Key-binding set name (e.g. "default", "vim", "emacs").
    pub key_bindings: String,
    /// Number of spaces per tab stop.
    pub tab_spaces: u32,
    /// Editor font size in points.
    pub font_size: u32,
    /// Color theme name.
    pub theme: String,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            key_bindings: "default".into(),
            tab_spaces: 4,
            font_size: 12,
            theme: "chrome".into(),
        }
    }
}
