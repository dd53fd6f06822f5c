//! Gold-per-guardian arithmetic shared by the ratio table and reward evaluation

use std::cmp::Ordering;

/// Gold per guardian. Unguarded sites have an infinite ratio regardless of their gold.
#[inline]
pub fn ratio(gold: f64, guardians: i32) -> f64 {
    if guardians == 0 {
        f64::INFINITY
    } else {
        gold / guardians as f64
    }
}

/// Gold collected by sending `units` adventurers to a site, never more than the site holds.
///
/// Only meaningful for capturable sites (`guardians > 0`).
#[inline]
pub fn capped_reward(gold: f64, guardians: i32, units: i32) -> f64 {
    (units as f64 * (gold / guardians as f64)).min(gold)
}

/// Orders ratios from highest to lowest. Ratios are never NaN, since gold is
/// kept finite and non-negative.
#[inline]
pub fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
