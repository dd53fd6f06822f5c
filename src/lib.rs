//! Pillage - greedy allocation of adventurers across land sites

pub mod allocator;
pub mod core;

// Re-export commonly used items
pub use allocator::{
    Allocation, Allocator, AllocatorOptions, Assignment, RatioEntry, RatioTable, RebuildStrategy,
};
pub use crate::core::{AllocError, InvalidArgument, Landscape, Site, SiteId};
