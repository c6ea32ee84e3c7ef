use crate::model::Driver;
use eyre::{Error, ensure};
use std::collections::HashSet;
use tracing::warn;

/// Warn about every inconsistent driver record and return the number of
/// problems found.
pub fn check_consistency(drivers: &[Driver]) -> usize {
    let mut problems = 0;
    let mut seen = HashSet::new();
    for d in drivers {
        if d.podiums < d.wins {
            warn!(driver = %d.name, wins = d.wins, podiums = d.podiums, "fewer podiums than wins");
            problems += 1;
        }
        if d.wins > d.starts {
            warn!(driver = %d.name, wins = d.wins, starts = d.starts, "more wins than starts");
            problems += 1;
        }
        if d.podiums > d.starts {
            warn!(driver = %d.name, podiums = d.podiums, starts = d.starts, "more podiums than starts");
            problems += 1;
        }
        if d.rookie && d.is_champion() {
            warn!(driver = %d.name, championships = d.championships, "rookie with championships");
            problems += 1;
        }
        if !d.points.is_finite() || d.points < 0.0 {
            warn!(driver = %d.name, points = d.points, "invalid points");
            problems += 1;
        }
        if !seen.insert(d.name.as_str()) {
            warn!(driver = %d.name, "duplicate driver");
            problems += 1;
        }
    }
    problems
}

pub fn ensure_consistent(drivers: &[Driver]) -> Result<(), Error> {
    let problems = check_consistency(drivers);
    ensure!(
        problems == 0,
        "{} inconsistencies found in driver records",
        problems
    );
    Ok(())
}
