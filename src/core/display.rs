use std::fmt;

use super::{
    landscape::{Landscape, SiteId},
    ratio::capped_reward,
    site::Site,
};
use crate::allocator::Allocation;

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} gold, {} guardians", self.name, self.gold, self.guardians)
    }
}

impl fmt::Display for Landscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, site) in self.iter() {
            writeln!(f, "{} {}", id, site)?;
        }
        Ok(())
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for assignment in self {
            writeln!(f, "{} <- {}", assignment.site, assignment.units)?;
        }
        writeln!(f, "total: {} adventurers", self.total_units())
    }
}

/// An allocation shown against the landscape it was computed on
pub struct AllocationView<'a> {
    pub(crate) allocation: &'a Allocation,
    pub(crate) landscape: &'a Landscape,
}

impl fmt::Display for AllocationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut gold = 0.0;

        for assignment in self.allocation {
            match self.landscape.get(assignment.site) {
                Some(site) => {
                    let reward = capped_reward(site.gold, site.guardians, assignment.units);
                    gold += reward;
                    writeln!(
                        f,
                        "{} {} <- {}/{} ({} gold)",
                        site.name, assignment.site, assignment.units, site.guardians, reward
                    )?;
                }
                None => writeln!(f, "? {} <- {}", assignment.site, assignment.units)?,
            }
        }

        writeln!(
            f,
            "total: {} adventurers, {} gold",
            self.allocation.total_units(),
            gold
        )
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::{Allocator, Landscape, Site};

    #[test]
    fn test_display_landscape() {
        let (landscape, _) = Landscape::from_sites([
            Site::new("A", 100.0, 10),
            Site::new("B", 60.5, 20),
        ])
        .unwrap();

        assert_eq!(
            landscape.to_string(),
            indoc! {"
                #0 A: 100 gold, 10 guardians
                #1 B: 60.5 gold, 20 guardians
            "}
        );
    }

    #[test]
    fn test_display_allocation() {
        let (landscape, ids) = Landscape::from_sites([
            Site::new("A", 100.0, 10),
            Site::new("B", 60.0, 20),
        ])
        .unwrap();
        let allocator = Allocator::new(&landscape, ids, 15).unwrap();
        let allocation = allocator.select_sites(&landscape).unwrap();

        assert_eq!(
            allocation.to_string(),
            indoc! {"
                #0 <- 10
                #1 <- 5
                total: 15 adventurers
            "}
        );
        assert_eq!(
            allocation.display(&landscape).to_string(),
            indoc! {"
                A #0 <- 10/10 (100 gold)
                B #1 <- 5/20 (15 gold)
                total: 15 adventurers, 115 gold
            "}
        );
    }
}
