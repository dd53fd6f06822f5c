use crate::core::{
    capped_reward, site::check_values, AllocError, InvalidArgument, Landscape, Result, Site,
    SiteId,
};

use super::allocation::Allocation;
use super::options::{AllocatorOptions, RebuildStrategy};
use super::table::RatioTable;

use tracing::{debug, trace};

/// Allocator distributes a pool of adventurers over a fixed list of sites,
/// highest gold-per-guardian first.
///
/// Sites live in a [`Landscape`] owned by the caller; the allocator keeps
/// handles into it and a ratio table derived from the sites' current state.
/// The table is rebuilt by [`update_site`](Self::update_site) only, so site
/// changes made through another allocator sharing the landscape are not
/// reflected in this one's ordering until it rebuilds.
#[derive(Debug, Clone)]
pub struct Allocator {
    landscape: u32,
    /// Landscape revision the ratio table was last brought up to date with
    revision: u64,
    sites: Vec<SiteId>,
    adventurers: i32,
    table: RatioTable,
    options: AllocatorOptions,
}

impl Allocator {
    /// Create an allocator with default options
    pub fn new(
        landscape: &Landscape,
        sites: impl IntoIterator<Item = SiteId>,
        adventurers: i32,
    ) -> Result<Self> {
        Self::with_options(landscape, sites, adventurers, AllocatorOptions::default())
    }

    pub fn with_options(
        landscape: &Landscape,
        sites: impl IntoIterator<Item = SiteId>,
        adventurers: i32,
        options: AllocatorOptions,
    ) -> Result<Self> {
        if adventurers < 0 {
            return Err(InvalidArgument::NegativeAdventurers(adventurers).into());
        }

        let sites = sites.into_iter().collect::<Vec<_>>();
        if let Some(&unknown) = sites.iter().find(|&&id| !landscape.contains(id)) {
            return Err(InvalidArgument::UnknownSite(unknown).into());
        }

        let table = RatioTable::build(landscape, &sites);
        debug!(sites = sites.len(), adventurers, "built ratio table");

        Ok(Self {
            landscape: landscape.tag(),
            revision: landscape.revision(),
            sites,
            adventurers,
            table,
            options,
        })
    }

    /// Choose sites for the whole pool
    pub fn select_sites(&self, landscape: &Landscape) -> Result<Allocation> {
        self.select_sites_with_pool(landscape, self.adventurers)
    }

    /// Choose sites for a pool of `pool` adventurers, leaving the stored pool alone
    pub fn select_sites_with_pool(&self, landscape: &Landscape, pool: i32) -> Result<Allocation> {
        self.check_landscape(landscape)?;
        if pool < 0 {
            return Err(InvalidArgument::NegativeAdventurers(pool).into());
        }

        let mut allocation = Allocation::default();
        self.walk(landscape, pool, |id, _, units| allocation.push(id, units))?;
        Ok(allocation)
    }

    /// Gold collected for each pool size, in the order given.
    ///
    /// Every pool size is evaluated against the current ratio table. A negative
    /// entry rejects the whole batch.
    pub fn select_sites_from_adventure_numbers(
        &self,
        landscape: &Landscape,
        pool_sizes: &[i32],
    ) -> Result<Vec<f64>> {
        self.check_landscape(landscape)?;
        if let Some((index, &value)) = pool_sizes.iter().enumerate().find(|(_, p)| **p < 0) {
            return Err(InvalidArgument::NegativePoolSize { index, value }.into());
        }

        let rewards = pool_sizes
            .iter()
            .map(|&pool| -> Result<f64> {
                let mut total = 0.0;
                self.walk(landscape, pool, |_, site, units| {
                    total += capped_reward(site.gold, site.guardians, units);
                })?;
                Ok(total)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(batches = rewards.len(), "evaluated pool sizes");
        Ok(rewards)
    }

    /// Set a site's gold and guardians, then refresh the ratio table.
    ///
    /// Nothing is modified unless `site` is one of this allocator's sites and
    /// the new values are valid.
    pub fn update_site(
        &mut self,
        landscape: &mut Landscape,
        site: SiteId,
        new_gold: f64,
        new_guardians: i32,
    ) -> Result<()> {
        self.check_landscape(landscape)?;
        if !self.sites.contains(&site) {
            return Err(InvalidArgument::UnknownSite(site).into());
        }
        check_values(new_gold, new_guardians)?;

        // Sites written through another allocator leave stale ratios in this table.
        let stale = landscape.revision() != self.revision;

        let target = landscape.site_mut(site)?;
        target.gold = new_gold;
        target.guardians = new_guardians;

        match self.options.rebuild {
            RebuildStrategy::Incremental if !stale => self.table.reinsert(landscape, site),
            _ => self.table = RatioTable::build(landscape, &self.sites),
        }
        self.revision = landscape.revision();
        debug!(
            %site,
            stale,
            gold = new_gold,
            guardians = new_guardians,
            rebuild = %self.options.rebuild,
            "updated site"
        );

        Ok(())
    }

    pub fn adventurers(&self) -> i32 {
        self.adventurers
    }

    /// Change the pool size used by `select_sites`
    pub fn set_adventurers(&mut self, adventurers: i32) -> Result<()> {
        if adventurers < 0 {
            return Err(InvalidArgument::NegativeAdventurers(adventurers).into());
        }
        self.adventurers = adventurers;
        Ok(())
    }

    /// Handles in the order the allocator was built with
    pub fn sites(&self) -> &[SiteId] {
        &self.sites
    }

    pub fn ratio_table(&self) -> &RatioTable {
        &self.table
    }

    pub fn options(&self) -> &AllocatorOptions {
        &self.options
    }

    /// Set allocator options
    pub fn set_option(&mut self, name: &str, value: &str) -> anyhow::Result<()> {
        self.options.set_option(name, value)
    }

    fn check_landscape(&self, landscape: &Landscape) -> Result<()> {
        if landscape.tag() != self.landscape {
            return Err(AllocError::ForeignLandscape);
        }
        Ok(())
    }

    /// Walk the ratio table sending adventurers until the pool runs out.
    /// Sites that cannot be captured are passed over without consuming any.
    fn walk<'l>(
        &self,
        landscape: &'l Landscape,
        pool: i32,
        mut visit: impl FnMut(SiteId, &'l Site, i32),
    ) -> Result<()> {
        let mut remaining = pool;

        for entry in self.table.iter() {
            if remaining == 0 {
                break;
            }

            let site = landscape
                .get(entry.site)
                .ok_or(InvalidArgument::UnknownSite(entry.site))?;
            if !site.is_capturable() {
                trace!(site = %entry.site, "skipping uncapturable site");
                continue;
            }

            let units = remaining.min(site.guardians);
            trace!(site = %entry.site, ratio = entry.ratio, units, remaining, "sending adventurers");
            visit(entry.site, site, units);
            remaining -= units;
        }

        Ok(())
    }
}
