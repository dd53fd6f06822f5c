/// Configuration options for the allocator
use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// How the ratio table is refreshed after a site update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RebuildStrategy {
    /// Recompute every ratio and re-sort the whole table
    #[default]
    Full,
    /// Recompute the updated site only and move it into place
    Incremental,
}

impl FromStr for RebuildStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(RebuildStrategy::Full),
            "incremental" => Ok(RebuildStrategy::Incremental),
            _ => bail!("Unknown rebuild strategy: {}", s),
        }
    }
}

impl fmt::Display for RebuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebuildStrategy::Full => write!(f, "full"),
            RebuildStrategy::Incremental => write!(f, "incremental"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocatorOptions {
    /// How the ratio table is refreshed by `update_site`
    pub rebuild: RebuildStrategy,
}

impl AllocatorOptions {
    pub fn new(rebuild: RebuildStrategy) -> Self {
        Self { rebuild }
    }

    /// Set an option by name, e.g. `rebuild` to `incremental`
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "rebuild" => self.rebuild = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}
