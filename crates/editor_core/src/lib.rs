use shared::{
    domain::{Orientation, PlacedComponent, PlacedComponentId},
    error::SequenceFull,
};
use tracing::{debug, info, warn};

pub mod catalog;
pub mod layout;
pub mod notice;

pub use catalog::{ComponentAsset, RECEIVER_LEFT, RECEIVER_RIGHT};
pub use layout::{derive_layout, LayoutItem};
pub use notice::LimitNotice;

/// Hard cap on sequence length. Keeps the strip renderable in one band and
/// bounds the placeholder numbering.
pub const MAX_COMPONENTS: usize = 12;

/// Owns the built sequence and the palette-wide orientation mode. All
/// mutation of the sequence goes through this store; every operation is
/// total and leaves the store valid (never over capacity, ids unique by
/// construction).
#[derive(Debug, Default)]
pub struct SequenceStore {
    components: Vec<PlacedComponent>,
    orientation_mode: Orientation,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.components.len() >= MAX_COMPONENTS
    }

    /// Orientation that will be stamped onto the next added entry and shown
    /// for unplaced palette entries.
    pub fn orientation_mode(&self) -> Orientation {
        self.orientation_mode
    }

    /// Flips the palette-wide orientation mode. Entries already in the
    /// sequence keep the orientation captured when they were added.
    pub fn toggle_orientation(&mut self) {
        self.orientation_mode = self.orientation_mode.flipped();
        debug!(mode = ?self.orientation_mode, "orientation mode toggled");
    }

    /// Appends a new entry for `asset_id` with a fresh id and the current
    /// orientation mode, returning the minted id. At capacity the add is
    /// rejected with [`SequenceFull`] and the sequence is untouched; this
    /// is a soft, user-facing guard, not a fault. Asset-id validity is not
    /// checked here: an unknown id still occupies a slot and is handled at
    /// render time.
    pub fn add(&mut self, asset_id: &str) -> Result<PlacedComponentId, SequenceFull> {
        if self.is_full() {
            warn!(asset_id, limit = MAX_COMPONENTS, "add rejected: sequence full");
            return Err(SequenceFull {
                limit: MAX_COMPONENTS,
            });
        }

        let id = PlacedComponentId::generate();
        info!(asset_id, orientation = ?self.orientation_mode, position = self.components.len(), "component added");
        self.components.push(PlacedComponent {
            id,
            asset_id: asset_id.to_string(),
            orientation: self.orientation_mode,
        });
        Ok(id)
    }

    /// Removes the entry with the given id, preserving the relative order
    /// of the rest. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: PlacedComponentId) {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        if self.components.len() < before {
            info!(?id, remaining = self.components.len(), "component removed");
        }
    }

    /// Empties the sequence unconditionally. Idempotent.
    pub fn clear(&mut self) {
        if !self.components.is_empty() {
            info!(cleared = self.components.len(), "sequence cleared");
        }
        self.components.clear();
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
