//! Sites, the landscape that owns them, and the arithmetic on them

pub mod display;
pub mod error;
pub mod landscape;
pub mod ratio;
pub mod site;

pub use display::AllocationView;
pub use error::{AllocError, InvalidArgument, Result};
pub use landscape::{Landscape, SiteId};
pub use ratio::{capped_reward, ratio};
pub use site::Site;
