//! The ratio table: referenced sites ordered by gold per guardian

use std::cmp::Ordering;

use crate::core::{ratio::descending, Landscape, SiteId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioEntry {
    pub ratio: f64,
    pub site: SiteId,
    /// Position of the site in the allocator's list, the tie-breaker for equal ratios
    pub slot: usize,
}

impl RatioEntry {
    /// Order of entries in a table: highest ratio first, then earliest slot
    fn order(&self, other: &Self) -> Ordering {
        descending(self.ratio, other.ratio).then(self.slot.cmp(&other.slot))
    }
}

/// Sites sorted by descending ratio, stable among equal ratios
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioTable {
    entries: Vec<RatioEntry>,
}

impl RatioTable {
    /// Compute every ratio from the current site state and sort.
    ///
    /// Handles missing from `landscape` are left out.
    pub fn build(landscape: &Landscape, sites: &[SiteId]) -> Self {
        let mut entries = sites
            .iter()
            .enumerate()
            .filter_map(|(slot, &site)| {
                landscape.get(site).map(|s| RatioEntry {
                    ratio: s.ratio(),
                    site,
                    slot,
                })
            })
            .collect::<Vec<_>>();

        // `sort_by` is stable, so equal ratios keep their slot order.
        entries.sort_by(|a, b| descending(a.ratio, b.ratio));

        Self { entries }
    }

    /// Recompute the ratio of `site` and move its entries to where a full
    /// rebuild would put them. Every other entry keeps its ratio, so this
    /// matches a full rebuild only if no other site changed since.
    pub fn reinsert(&mut self, landscape: &Landscape, site: SiteId) {
        let Some(ratio) = landscape.get(site).map(|s| s.ratio()) else {
            return;
        };

        let mut moved = Vec::new();
        self.entries.retain(|entry| {
            if entry.site == site {
                moved.push(RatioEntry { ratio, ..*entry });
                false
            } else {
                true
            }
        });

        for entry in moved {
            let pos = self
                .entries
                .partition_point(|e| e.order(&entry) == Ordering::Less);
            self.entries.insert(pos, entry);
        }
    }

    pub fn entries(&self) -> &[RatioEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RatioEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
