use crate::model::Driver;
use std::cmp::Ordering;

/// Compare two drivers by competitive standing (`Less` ranks first).
///
/// Non-rookies come before rookies, then higher championships, wins and
/// points come first.
pub fn compare(a: &Driver, b: &Driver) -> Ordering {
    a.rookie
        .cmp(&b.rookie)
        .then_with(|| b.championships.cmp(&a.championships))
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| compare_points(b.points, a.points))
}

/// Numeric comparison where `-0.0` equals `0.0`. NaN still gets a fixed place.
fn compare_points(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Return the drivers ordered by standing. Drivers which compare equal keep
/// their input order. The input is left untouched.
pub fn rank(drivers: &[Driver]) -> Vec<&Driver> {
    let mut ranked = drivers.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}

/// Number an already ranked list, starting at 1.
pub fn positions<'a>(ranked: &[&'a Driver]) -> Vec<(usize, &'a Driver)> {
    ranked.iter().enumerate().map(|(i, &d)| (i + 1, d)).collect()
}
