//! Allocation errors

use thiserror::Error;

use super::landscape::SiteId;

/// A precondition violated by the caller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("adventurer pool cannot be negative: {0}")]
    NegativeAdventurers(i32),

    #[error("pool size at position {index} cannot be negative: {value}")]
    NegativePoolSize { index: usize, value: i32 },

    #[error("guardian count cannot be negative: {0}")]
    NegativeGuardians(i32),

    #[error("gold must be finite and non-negative: {0}")]
    InvalidGold(f64),

    #[error("site {0} is not managed here")]
    UnknownSite(SiteId),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("landscape differs from the one the allocator was built on")]
    ForeignLandscape,
}

pub type Result<T, E = AllocError> = std::result::Result<T, E>;
