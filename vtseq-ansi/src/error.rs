use thiserror::Error;

/// A G-set selector outside `0..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid G-set selector {0}, expected 0, 1, 2 or 3")]
pub struct InvalidGSet(pub i64);

/// A name that is not in the [`Fixed`](crate::Fixed) catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{0:?} is not a known sequence name")]
pub struct UnknownSequence(pub String);
