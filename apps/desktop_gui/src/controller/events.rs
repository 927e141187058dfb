//! Input events accepted by the editor and their mapping onto the store.
//! Each UI interaction produces exactly one command; commands are applied
//! to completion, one at a time, inside the frame that raised them.

use std::time::Instant;

use editor_core::{LimitNotice, SequenceStore};
use shared::domain::PlacedComponentId;

/// The four input events of the editor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Palette click: append the chosen component type.
    Select { asset_id: String },
    /// Flip toggle: mirror the palette and subsequently added entries.
    ToggleOrientation,
    /// Remove link under a placed component.
    Remove { id: PlacedComponentId },
    /// Clear-all button.
    ClearAll,
}

/// Applies one command to the store. A `Select` rejected at capacity
/// raises the limit notice; every other outcome is silent.
pub fn apply_command(
    store: &mut SequenceStore,
    notice: &mut LimitNotice,
    command: EditorCommand,
    now: Instant,
) {
    match command {
        EditorCommand::Select { asset_id } => {
            if store.add(&asset_id).is_err() {
                notice.trigger(now);
            }
        }
        EditorCommand::ToggleOrientation => store.toggle_orientation(),
        EditorCommand::Remove { id } => store.remove(id),
        EditorCommand::ClearAll => store.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core::MAX_COMPONENTS;
    use shared::domain::Orientation;

    #[test]
    fn select_appends_with_the_current_mode() {
        let mut store = SequenceStore::new();
        let mut notice = LimitNotice::new();
        let now = Instant::now();

        apply_command(&mut store, &mut notice, EditorCommand::ToggleOrientation, now);
        apply_command(
            &mut store,
            &mut notice,
            EditorCommand::Select {
                asset_id: "MPO8-MPO8".into(),
            },
            now,
        );

        assert_eq!(store.components()[0].orientation, Orientation::Flipped);
        assert!(!notice.is_visible(now));
    }

    #[test]
    fn rejected_select_raises_the_notice() {
        let mut store = SequenceStore::new();
        let mut notice = LimitNotice::new();
        let now = Instant::now();

        for _ in 0..=MAX_COMPONENTS {
            apply_command(
                &mut store,
                &mut notice,
                EditorCommand::Select {
                    asset_id: "LC-OM5-LC".into(),
                },
                now,
            );
        }

        assert_eq!(store.len(), MAX_COMPONENTS);
        assert!(notice.is_visible(now));
    }

    #[test]
    fn remove_and_clear_map_straight_through() {
        let mut store = SequenceStore::new();
        let mut notice = LimitNotice::new();
        let now = Instant::now();

        let keep = store.add("a").unwrap();
        let doomed = store.add("b").unwrap();

        apply_command(&mut store, &mut notice, EditorCommand::Remove { id: doomed }, now);
        assert_eq!(store.len(), 1);
        assert_eq!(store.components()[0].id, keep);

        apply_command(&mut store, &mut notice, EditorCommand::ClearAll, now);
        assert!(store.is_empty());
    }
}
