use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mirroring state of a component: which of its two renderable faces is
/// shown. Doubles as the palette-wide mode stamped onto new entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Normal,
    Flipped,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Self::Normal => Self::Flipped,
            Self::Flipped => Self::Normal,
        }
    }
}

/// Identity of a placed entry, minted at insertion time. Independent of the
/// asset id and never reused, so removal targeting stays unambiguous even
/// when the same component type appears several times in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedComponentId(pub Uuid);

impl PlacedComponentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One entry of the built sequence. Immutable after creation: the only way
/// to change a placed component is to remove it and add a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: PlacedComponentId,
    pub asset_id: String,
    pub orientation: Orientation,
}
