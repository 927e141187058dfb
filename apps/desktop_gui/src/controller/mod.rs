//! Controller layer: input events and their application to the store.

pub mod events;
