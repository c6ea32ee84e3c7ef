use crate::model::Driver;
use std::collections::HashMap;

/// Accumulated points per team, best team first. Teams with equal points are
/// sorted by name.
pub fn team_standings(drivers: &[Driver]) -> Vec<(&str, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for d in drivers {
        *totals.entry(d.team.as_str()).or_default() += d.points;
    }
    let mut standings = totals.into_iter().collect::<Vec<_>>();
    standings.sort_by(|(ta, pa), (tb, pb)| pb.total_cmp(pa).then_with(|| ta.cmp(tb)));
    standings
}

/// Drivers grouped by team, teams sorted by name. Drivers keep the order they
/// have in `ranked`.
pub fn drivers_by_team<'a>(ranked: &[&'a Driver]) -> Vec<(&'a str, Vec<&'a Driver>)> {
    let mut teams: Vec<(&str, Vec<&Driver>)> = Vec::new();
    for &d in ranked {
        match teams.iter_mut().find(|(team, _)| *team == d.team) {
            Some((_, members)) => members.push(d),
            None => teams.push((d.team.as_str(), vec![d])),
        }
    }
    teams.sort_by_key(|&(team, _)| team);
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::FixtureLoader;
    use crate::ranking;

    #[test]
    fn test_team_standings() {
        let drivers = FixtureLoader::drivers();
        let standings = team_standings(&drivers);
        assert_eq!(standings[0], ("Ferrari", 5867.0));
        assert_eq!(standings[1], ("Red Bull", 2857.0));
        assert_eq!(standings[2], ("McLaren", 1080.0));
        assert_eq!(standings[3], ("Mercedes", 471.0));
        let tail = standings[4..].iter().map(|&(t, _)| t).collect::<Vec<_>>();
        assert_eq!(tail, ["Haas", "Racing Bulls", "Sauber"]);
    }

    #[test]
    fn test_drivers_by_team() {
        let drivers = FixtureLoader::drivers();
        let ranked = ranking::rank(&drivers);
        let teams = drivers_by_team(&ranked);
        assert_eq!(teams.len(), 7);
        assert_eq!(teams[0].0, "Ferrari");
        let ferrari = teams[0].1.iter().map(|d| d.name.as_str()).collect::<Vec<_>>();
        assert_eq!(ferrari, ["Lewis Hamilton", "Charles Leclerc"]);
        let (team, mercedes) = &teams[3];
        assert_eq!(*team, "Mercedes");
        assert_eq!(mercedes[1].name, "Kimi Antonelli");
    }

    #[test]
    fn test_empty() {
        assert!(team_standings(&[]).is_empty());
        assert!(drivers_by_team(&[]).is_empty());
    }
}
