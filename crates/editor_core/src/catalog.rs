//! Static component catalog: every placeable fiber component type, each
//! with a renderable reference per orientation. Fixed at build time; the
//! palette shows these in table order (the 9 + 6 row split is a
//! presentation convention, not a property of the data).

use shared::domain::Orientation;

/// One catalog entry. `normal` and `flipped` are opaque renderable
/// references (end-face captions) for the two orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentAsset {
    pub id: &'static str,
    pub normal: &'static str,
    pub flipped: &'static str,
}

impl ComponentAsset {
    /// Renderable reference for the requested orientation.
    pub fn reference(&self, orientation: Orientation) -> &'static str {
        match orientation {
            Orientation::Normal => self.normal,
            Orientation::Flipped => self.flipped,
        }
    }
}

/// Fixed start-of-path receiver reference.
pub const RECEIVER_LEFT: &str = "TX ▸";
/// Fixed end-of-path receiver reference.
pub const RECEIVER_RIGHT: &str = "▸ RX";

pub const COMPONENT_ASSETS: [ComponentAsset; 15] = [
    // Transition modules (MPO to LC)
    ComponentAsset {
        id: "MPO8-OM5-LC",
        normal: "MPO8 ▸ LC",
        flipped: "LC ◂ MPO8",
    },
    ComponentAsset {
        id: "MPO12-OM5-LC",
        normal: "MPO12 ▸ LC",
        flipped: "LC ◂ MPO12",
    },
    ComponentAsset {
        id: "MPO16-OM5-LC",
        normal: "MPO16 ▸ LC",
        flipped: "LC ◂ MPO16",
    },
    ComponentAsset {
        id: "MPO24-OM5-LC",
        normal: "MPO24 ▸ LC",
        flipped: "LC ◂ MPO24",
    },
    // Conversion modules
    ComponentAsset {
        id: "MPO12-2x3CM-MPO8",
        normal: "MPO12 ▸ 2x3 ▸ MPO8",
        flipped: "MPO8 ◂ 2x3 ◂ MPO12",
    },
    ComponentAsset {
        id: "MPO16-1x2CM-MPO8",
        normal: "MPO16 ▸ 1x2 ▸ MPO8",
        flipped: "MPO8 ◂ 1x2 ◂ MPO16",
    },
    ComponentAsset {
        id: "MPO16-4x3CM-MPO12",
        normal: "MPO16 ▸ 4x3 ▸ MPO12",
        flipped: "MPO12 ◂ 4x3 ◂ MPO16",
    },
    ComponentAsset {
        id: "MPO24-1x3CM-MPO8",
        normal: "MPO24 ▸ 1x3 ▸ MPO8",
        flipped: "MPO8 ◂ 1x3 ◂ MPO24",
    },
    ComponentAsset {
        id: "MPO24-2x3CM-MPO16",
        normal: "MPO24 ▸ 2x3 ▸ MPO16",
        flipped: "MPO16 ◂ 2x3 ◂ MPO24",
    },
    // Standard connectors
    ComponentAsset {
        id: "LC-OM5-LC",
        normal: "LC ▸ LC",
        flipped: "LC ◂ LC",
    },
    ComponentAsset {
        id: "MPO8-MPO8",
        normal: "MPO8 ▸ MPO8",
        flipped: "MPO8 ◂ MPO8",
    },
    ComponentAsset {
        id: "MPO12-MPO12",
        normal: "MPO12 ▸ MPO12",
        flipped: "MPO12 ◂ MPO12",
    },
    ComponentAsset {
        id: "MPO16-MPO16",
        normal: "MPO16 ▸ MPO16",
        flipped: "MPO16 ◂ MPO16",
    },
    ComponentAsset {
        id: "MPO24-MPO24",
        normal: "MPO24 ▸ MPO24",
        flipped: "MPO24 ◂ MPO24",
    },
    // Splice
    ComponentAsset {
        id: "LC-SPLICE-OM5-LC",
        normal: "LC ▸|◂ LC",
        flipped: "LC ▸|◂ LC ⟲",
    },
];

/// Full ordered catalog, for palette enumeration.
pub fn all() -> &'static [ComponentAsset] {
    &COMPONENT_ASSETS
}

/// Looks up a catalog entry by component type id. `None` means the caller
/// holds a reference the catalog does not know; rendering treats such
/// entries as absent rather than erroring.
pub fn resolve(asset_id: &str) -> Option<&'static ComponentAsset> {
    COMPONENT_ASSETS.iter().find(|asset| asset.id == asset_id)
}
