mod allocation;
mod allocator;
mod options;
mod table;

pub use allocation::{Allocation, Assignment};
pub use allocator::Allocator;
pub use options::{AllocatorOptions, RebuildStrategy};
pub use table::{RatioEntry, RatioTable};
