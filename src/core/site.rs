//! Land sites

use super::error::InvalidArgument;
use super::ratio::ratio;

/// A land site: gold waiting to be collected, guarded by some number of guardians
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Identifier for display purposes, not required to be unique
    pub name: String,
    /// Total gold collected by fully capturing the site
    pub gold: f64,
    /// Adventurers needed to fully capture the site
    pub guardians: i32,
}

impl Site {
    pub fn new(name: impl Into<String>, gold: f64, guardians: i32) -> Self {
        Self {
            name: name.into(),
            gold,
            guardians,
        }
    }

    /// Whether adventurers sent here can collect anything
    #[inline]
    pub fn is_capturable(&self) -> bool {
        self.gold > 0.0 && self.guardians > 0
    }

    /// Gold per guardian, infinite for an unguarded site
    #[inline]
    pub fn ratio(&self) -> f64 {
        ratio(self.gold, self.guardians)
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidArgument> {
        check_values(self.gold, self.guardians)
    }
}

/// Gold must be finite and non-negative, guardians non-negative.
pub(crate) fn check_values(gold: f64, guardians: i32) -> Result<(), InvalidArgument> {
    if !gold.is_finite() || gold < 0.0 {
        return Err(InvalidArgument::InvalidGold(gold));
    }
    if guardians < 0 {
        return Err(InvalidArgument::NegativeGuardians(guardians));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(100.0, 10, true; "gold and guardians")]
    #[test_case(0.0, 10, false; "no gold")]
    #[test_case(50.0, 0, false; "no guardians")]
    #[test_case(0.0, 0, false; "empty")]
    fn test_is_capturable(gold: f64, guardians: i32, expected: bool) {
        assert_eq!(Site::new("x", gold, guardians).is_capturable(), expected);
    }

    #[test]
    fn test_ratio() {
        assert_eq!(Site::new("a", 100.0, 10).ratio(), 10.0);
        assert_eq!(Site::new("b", 60.0, 20).ratio(), 3.0);
        assert_eq!(Site::new("c", 50.0, 0).ratio(), f64::INFINITY);
        assert_eq!(Site::new("d", 0.0, 0).ratio(), f64::INFINITY);
    }

    #[test]
    fn test_validate() {
        assert!(Site::new("ok", 0.0, 0).validate().is_ok());
        assert_eq!(
            Site::new("neg", -1.0, 3).validate(),
            Err(InvalidArgument::InvalidGold(-1.0))
        );
        assert!(matches!(
            Site::new("nan", f64::NAN, 3).validate(),
            Err(InvalidArgument::InvalidGold(g)) if g.is_nan()
        ));
        assert_eq!(
            Site::new("inf", f64::INFINITY, 3).validate(),
            Err(InvalidArgument::InvalidGold(f64::INFINITY))
        );
        assert_eq!(
            Site::new("guards", 5.0, -2).validate(),
            Err(InvalidArgument::NegativeGuardians(-2))
        );
    }
}
