use crate::core::{capped_reward, AllocError, AllocationView, InvalidArgument, Landscape, SiteId};

/// Adventurers sent to one site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub site: SiteId,
    pub units: i32,
}

/// Result of a greedy walk, in the order sites were visited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    assignments: Vec<Assignment>,
}

impl Allocation {
    pub(crate) fn push(&mut self, site: SiteId, units: i32) {
        self.assignments.push(Assignment { site, units });
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn total_units(&self) -> i32 {
        self.assignments.iter().map(|a| a.units).sum()
    }

    /// Units sent to `site`, zero if it was not visited
    pub fn units_for(&self, site: SiteId) -> i32 {
        self.assignments
            .iter()
            .filter(|a| a.site == site)
            .map(|a| a.units)
            .sum()
    }

    /// Gold collected by this allocation against the current site state
    pub fn reward(&self, landscape: &Landscape) -> Result<f64, AllocError> {
        let mut total = 0.0;
        for assignment in &self.assignments {
            let site = landscape
                .get(assignment.site)
                .ok_or(InvalidArgument::UnknownSite(assignment.site))?;
            total += capped_reward(site.gold, site.guardians, assignment.units);
        }
        Ok(total)
    }

    /// Display with site names and per-site gold
    pub fn display<'a>(&'a self, landscape: &'a Landscape) -> AllocationView<'a> {
        AllocationView {
            allocation: self,
            landscape,
        }
    }
}

impl<'a> IntoIterator for &'a Allocation {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
