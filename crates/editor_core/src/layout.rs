//! Derivation of the sequence strip's render plan. Pure function of the
//! current sequence and the capacity; recomputed on every render, nothing
//! is cached.

use shared::domain::PlacedComponent;

/// One marker of the render plan, in left-to-right strip order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutItem {
    /// Fixed start receiver, always the first item.
    StartReceiver,
    /// Dashed link between two adjacent placed components.
    Connector,
    /// A placed entry. Resolution against the catalog happens at render
    /// time; an unresolvable entry still occupies its slot here so that
    /// numbering and connector pairing stay stable.
    Component(PlacedComponent),
    /// End receiver, marking the current terminus of the built path.
    EndReceiver,
    /// Unused capacity, shown as a numbered circle. `slot` is 1-based.
    Placeholder { slot: usize },
}

/// Computes the strip layout for a sequence of length L (0 ≤ L ≤ capacity):
/// start receiver, then either all placeholders followed by the end
/// receiver (empty sequence), or the components joined by connectors, the
/// end receiver directly after the last component, and placeholders
/// numbered L+1..=capacity after it. The end receiver tracks the terminus
/// of the built path, so unused capacity always trails it.
pub fn derive_layout(sequence: &[PlacedComponent], capacity: usize) -> Vec<LayoutItem> {
    let mut plan = Vec::with_capacity(capacity + sequence.len() + 2);
    plan.push(LayoutItem::StartReceiver);

    if sequence.is_empty() {
        plan.extend((1..=capacity).map(|slot| LayoutItem::Placeholder { slot }));
        plan.push(LayoutItem::EndReceiver);
        return plan;
    }

    for (index, placed) in sequence.iter().enumerate() {
        if index > 0 {
            plan.push(LayoutItem::Connector);
        }
        plan.push(LayoutItem::Component(placed.clone()));
    }
    plan.push(LayoutItem::EndReceiver);
    plan.extend((sequence.len() + 1..=capacity).map(|slot| LayoutItem::Placeholder { slot }));
    plan
}
