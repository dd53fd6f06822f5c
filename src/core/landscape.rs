//! Arena of land sites addressed by stable handles

use std::sync::atomic::{AtomicU32, Ordering};

use super::error::{AllocError, InvalidArgument};
use super::site::Site;

static NEXT_TAG: AtomicU32 = AtomicU32::new(0);

/// Handle to a site in a [`Landscape`]
///
/// Handles remember which landscape issued them, so a handle is never
/// resolved against the wrong arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId {
    landscape: u32,
    index: usize,
}

impl SiteId {
    /// Position of the site within its landscape
    pub fn index(self) -> usize {
        self.index
    }
}

/// Owns every site. Sites are only ever appended, so handles stay valid for
/// the life of the landscape.
///
/// Reading is open to everyone; writing goes through
/// [`Allocator::update_site`](crate::Allocator::update_site).
#[derive(Debug)]
pub struct Landscape {
    tag: u32,
    /// Bumped on every write to a site
    revision: u64,
    sites: Vec<Site>,
}

impl Landscape {
    pub fn new() -> Self {
        Self {
            tag: NEXT_TAG.fetch_add(1, Ordering::Relaxed),
            revision: 0,
            sites: Vec::new(),
        }
    }

    /// Build a landscape from a list of sites, returning their handles in order
    pub fn from_sites(
        sites: impl IntoIterator<Item = Site>,
    ) -> Result<(Self, Vec<SiteId>), AllocError> {
        let mut landscape = Self::new();
        let ids = sites
            .into_iter()
            .map(|site| landscape.add(site))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((landscape, ids))
    }

    pub fn add(&mut self, site: Site) -> Result<SiteId, AllocError> {
        site.validate()?;

        let id = SiteId {
            landscape: self.tag,
            index: self.sites.len(),
        };
        self.sites.push(site);
        Ok(id)
    }

    pub fn get(&self, id: SiteId) -> Option<&Site> {
        if id.landscape != self.tag {
            return None;
        }
        self.sites.get(id.index)
    }

    pub(crate) fn site_mut(&mut self, id: SiteId) -> Result<&mut Site, InvalidArgument> {
        if id.landscape != self.tag {
            return Err(InvalidArgument::UnknownSite(id));
        }
        let site = self
            .sites
            .get_mut(id.index)
            .ok_or(InvalidArgument::UnknownSite(id))?;
        self.revision += 1;
        Ok(site)
    }

    pub fn contains(&self, id: SiteId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = SiteId> + '_ {
        (0..self.sites.len()).map(|index| SiteId {
            landscape: self.tag,
            index,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (SiteId, &Site)> {
        self.ids().zip(self.sites.iter())
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub(crate) fn tag(&self) -> u32 {
        self.tag
    }

    /// Number of site writes so far. Appending sites does not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Landscape {
    fn default() -> Self {
        Self::new()
    }
}
