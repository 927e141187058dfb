use thiserror::Error;

/// Soft rejection returned by the store when an add would push the sequence
/// past its capacity. Not a fault: callers surface it as a timed warning,
/// never propagate it as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sequence is full: limit of {limit} components reached")]
pub struct SequenceFull {
    pub limit: usize,
}
