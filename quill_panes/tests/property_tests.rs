//! Property-based tests for registry invariants.

use proptest::prelude::*;

use quill_panes::config::EditorPreferences;
use quill_panes::pane::PaneId;
use quill_panes::registry::PaneRegistry;

/// An operation against the registry, with targets chosen by index so
/// that generated sequences stay meaningful as panes come and go.
#[derive(Debug, Clone)]
enum Op {
    Add { with_file: bool },
    Close(usize),
    Focus(usize),
    CloseActive,
    MoveLeft,
    MoveRight,
    MarkUnsaved(usize),
    MarkSaved(usize),
    FontSize(u32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(|with_file| Op::Add { with_file }),
        (0usize..100).prop_map(Op::Close),
        (0usize..100).prop_map(Op::Focus),
        Just(Op::CloseActive),
        Just(Op::MoveLeft),
        Just(Op::MoveRight),
        (0usize..100).prop_map(Op::MarkUnsaved),
        (0usize..100).prop_map(Op::MarkSaved),
        (6u32..40).prop_map(Op::FontSize),
    ]
}

/// Resolve an index-based target to the id of an existing pane.
fn target_id(registry: &PaneRegistry, index: usize) -> PaneId {
    registry.panes()[index % registry.len()].id
}

fn apply_op(registry: &mut PaneRegistry, op: &Op) {
    match op {
        Op::Add { with_file } => {
            let filename = with_file.then(|| "dir/file.py".to_string());
            registry.add_file(filename, None);
        },
        Op::Close(i) => {
            let id = target_id(registry, *i);
            registry.close(id);
        },
        Op::Focus(i) => {
            let id = target_id(registry, *i);
            registry.focus(id).unwrap();
        },
        Op::CloseActive => {
            registry.close_active().unwrap();
        },
        Op::MoveLeft => registry.shift_focus(-1).unwrap(),
        Op::MoveRight => registry.shift_focus(1).unwrap(),
        Op::MarkUnsaved(i) => {
            let id = target_id(registry, *i);
            registry.mark_unsaved(id).unwrap();
        },
        Op::MarkSaved(i) => {
            let id = target_id(registry, *i);
            registry.mark_saved(id).unwrap();
        },
        Op::FontSize(size) => {
            registry.change_preference("fontSize", &serde_json::json!(size));
        },
    }
}

proptest! {
    /// Every reachable state keeps exactly one focused pane and at least
    /// one pane, with all ids unique.
    #[test]
    fn invariants_hold_under_any_sequence(ops in proptest::collection::vec(arb_op(), 1..60)) {
        let mut registry = PaneRegistry::new(EditorPreferences::default());

        for op in &ops {
            apply_op(&mut registry, op);

            prop_assert!(registry.len() >= 1);
            let focused = registry.panes().iter().filter(|p| p.has_focus).count();
            prop_assert_eq!(focused, 1, "focus count after {:?}", op);

            let mut ids: Vec<u64> = registry.panes().iter().map(|p| p.id.0).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), registry.len());
        }
    }

    /// After an add, the new pane is focused and last.
    #[test]
    fn add_always_focuses_last(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut registry = PaneRegistry::new(EditorPreferences::default());
        for op in &ops {
            apply_op(&mut registry, op);
        }

        let id = registry.add_file(None, None);
        let last = registry.panes().last().unwrap();
        prop_assert_eq!(last.id, id);
        prop_assert!(last.has_focus);
    }

    /// Closing never drops the registry below one pane.
    #[test]
    fn close_never_empties(count in 1usize..10) {
        let mut registry = PaneRegistry::new(EditorPreferences::default());
        for _ in 0..count {
            registry.add_file(None, None);
        }

        // Close more panes than exist.
        for _ in 0..(count + 5) {
            registry.close_active().unwrap();
        }
        prop_assert_eq!(registry.len(), 1);
        prop_assert!(registry.focused().is_some());
    }

    /// mark_saved is idempotent for any target.
    #[test]
    fn mark_saved_idempotent(adds in 0usize..5, pick in 0usize..100) {
        let mut registry = PaneRegistry::new(EditorPreferences::default());
        for _ in 0..adds {
            registry.add_file(None, None);
        }
        let id = target_id(&registry, pick);
        registry.mark_unsaved(id).unwrap();

        registry.mark_saved(id).unwrap();
        let once = registry.clone();
        registry.mark_saved(id).unwrap();
        prop_assert_eq!(once.panes(), registry.panes());
    }

    /// Font size changes apply to every pane, whatever the value's wire
    /// form.
    #[test]
    fn font_size_applies_to_all(adds in 0usize..6, size in 6u32..40, as_string: bool) {
        let mut registry = PaneRegistry::new(EditorPreferences::default());
        for _ in 0..adds {
            registry.add_file(None, None);
        }

        let value = if as_string {
            serde_json::Value::String(size.to_string())
        } else {
            serde_json::json!(size)
        };
        registry.change_preference("fontSize", &value);
        prop_assert!(registry.panes().iter().all(|p| p.font_size == size));
    }
}
