//! The pane registry and its transitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::EditorPreferences;
use crate::effect::Effect;
use crate::error::{PaneError, PaneResult};
use crate::event::PaneEvent;
use crate::pane::{FileStats, Pane, PaneId, TabId, label_from_filename};

/// The ordered collection of all open panes.
///
/// Insertion order is the tab display order. The registry is seeded with
/// one default pane and never drops below one pane afterwards; whenever
/// it is non-empty, exactly one pane holds focus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaneRegistry {
    /// Open panes in tab display order.
    panes: Vec<Pane>,
    /// Preferences copied into each newly created pane.
    prefs: EditorPreferences,
    /// Counter for generating unique pane and tab ids.
    next_id: u64,
}

impl Default for PaneRegistry {
    fn default() -> Self {
        Self::new(EditorPreferences::default())
    }
}

impl PaneRegistry {
    /// Create a registry seeded with one default focused pane.
    pub fn new(prefs: EditorPreferences) -> Self {
        let mut registry = Self { panes: Vec::new(), prefs, next_id: 0 };
        registry.add_file(None, None);
        registry
    }

    /// Apply a dispatched event and return the side effect to execute,
    /// if any.
    pub fn apply(&mut self, event: PaneEvent) -> PaneResult<Option<Effect>> {
        match event {
            PaneEvent::AddFile { filename, stats } => {
                self.add_file(filename, stats);
                Ok(None)
            },
            PaneEvent::CloseFile { id } => {
                self.close(id);
                Ok(None)
            },
            PaneEvent::FocusFile { id } => self.focus(id).map(|_| None),
            PaneEvent::FileIsSaved { id } => self.mark_saved(id).map(|_| None),
            PaneEvent::FileHasChanges { id } => self.mark_unsaved(id).map(|_| None),
            PaneEvent::CloseActiveFile => self.close_active().map(|_| None),
            PaneEvent::SplitPaneDrag => Ok(Some(Effect::ScheduleRelayout)),
            PaneEvent::MoveOneRight => self.shift_focus(1).map(|_| None),
            PaneEvent::MoveOneLeft => self.shift_focus(-1).map(|_| None),
            PaneEvent::ChangePreference { key, value } => {
                self.change_preference(&key, &value);
                Ok(None)
            },
        }
    }

    /// Open a new pane at the end of the tab order and focus it.
    ///
    /// With a filename, the label becomes the last path segment and the
    /// stats (when given) are attached; without one, the pane is an
    /// unsaved "New File" buffer.
    pub fn add_file(&mut self, filename: Option<String>, stats: Option<FileStats>) -> PaneId {
        let id = PaneId(self.alloc_id());
        let tab_id = TabId(self.alloc_id());
        let mut pane = Pane::new(id, tab_id, &self.prefs);

        if let Some(filename) = filename {
            pane.label = label_from_filename(&filename);
            pane.filename = Some(filename);
            pane.stats = stats;
        }

        if let Some(focused) = self.panes.iter_mut().find(|p| p.has_focus) {
            focused.has_focus = false;
        }
        self.panes.push(pane);
        id
    }

    /// Close the pane with the given id. Returns `true` if a pane was
    /// removed.
    ///
    /// Closing an unknown id is a no-op, as is closing the last
    /// remaining pane. When the closed pane held focus, focus moves to
    /// the preceding pane, or to the new first pane if it was at index 0.
    pub fn close(&mut self, id: PaneId) -> bool {
        let Some(index) = self.panes.iter().position(|p| p.id == id) else {
            return false;
        };
        if self.panes.len() == 1 {
            return false;
        }

        let removed = self.panes.remove(index);
        if removed.has_focus {
            let heir = index.saturating_sub(1);
            self.panes[heir].has_focus = true;
        }
        true
    }

    /// Give focus to the pane with the given id.
    ///
    /// Focusing the already-focused pane leaves the registry unchanged.
    pub fn focus(&mut self, id: PaneId) -> PaneResult<()> {
        let target = self
            .panes
            .iter()
            .position(|p| p.id == id)
            .ok_or(PaneError::PaneNotFound(id.0))?;
        if self.panes[target].has_focus {
            return Ok(());
        }

        if let Some(focused) = self.panes.iter_mut().find(|p| p.has_focus) {
            focused.has_focus = false;
        }
        self.panes[target].has_focus = true;
        Ok(())
    }

    /// Close whichever pane currently holds focus. Returns `true` if a
    /// pane was removed (the last remaining pane is never removed).
    pub fn close_active(&mut self) -> PaneResult<bool> {
        let id = self.focused().ok_or(PaneError::NoFocusedPane)?.id;
        Ok(self.close(id))
    }

    /// Move focus by `direction` (+1 right, -1 left) in tab order.
    ///
    /// Focus never moves past the first or last pane; a request at the
    /// boundary is a no-op.
    pub fn shift_focus(&mut self, direction: isize) -> PaneResult<()> {
        let index = self
            .panes
            .iter()
            .position(|p| p.has_focus)
            .ok_or(PaneError::NoFocusedPane)?;
        let target = index as isize + direction;
        if target < 0 || target as usize >= self.panes.len() {
            return Ok(());
        }

        self.panes[index].has_focus = false;
        self.panes[target as usize].has_focus = true;
        Ok(())
    }

    /// Mark the pane as holding unsaved edits.
    pub fn mark_unsaved(&mut self, id: PaneId) -> PaneResult<()> {
        self.pane_mut(id)?.has_unsaved_changes = true;
        Ok(())
    }

    /// Clear the unsaved-edits marker after a successful save.
    pub fn mark_saved(&mut self, id: PaneId) -> PaneResult<()> {
        self.pane_mut(id)?.has_unsaved_changes = false;
        Ok(())
    }

    /// Apply a changed preference to every pane and to the defaults used
    /// for panes created later.
    ///
    /// Keys use the settings-store names: `fontSize`, `aceTabSpaces`,
    /// `aceKeyBindings`. Numeric values are accepted both as JSON numbers
    /// and as the string form produced by text inputs. Unknown keys and
    /// un-coercible values leave the registry unchanged.
    pub fn change_preference(&mut self, key: &str, value: &Value) {
        match key {
            "fontSize" => {
                if let Some(size) = coerce_u32(value) {
                    self.prefs.font_size = size;
                    for pane in &mut self.panes {
                        pane.font_size = size;
                    }
                }
            },
            "aceTabSpaces" => {
                if let Some(spaces) = coerce_u32(value) {
                    self.prefs.tab_spaces = spaces;
                    for pane in &mut self.panes {
                        pane.tab_spaces = spaces;
                    }
                }
            },
            "aceKeyBindings" => {
                if let Some(bindings) = value.as_str() {
                    self.prefs.key_bindings = bindings.to_string();
                    for pane in &mut self.panes {
                        pane.key_bindings = bindings.to_string();
                    }
                }
            },
            _ => {},
        }
    }

    /// Panes in tab display order.
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// The pane currently holding focus.
    pub fn focused(&self) -> Option<&Pane> {
        self.panes.iter().find(|p| p.has_focus)
    }

    /// Look up a pane by id.
    pub fn get(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id == id)
    }

    /// Number of open panes.
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// Whether the registry has no panes (only before seeding).
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// The preferences applied to newly created panes.
    pub fn preferences(&self) -> &EditorPreferences {
        &self.prefs
    }

    fn pane_mut(&mut self, id: PaneId) -> PaneResult<&mut Pane> {
        self.panes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PaneError::PaneNotFound(id.0))
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Accept numeric preference values as JSON numbers or decimal strings.
fn coerce_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
