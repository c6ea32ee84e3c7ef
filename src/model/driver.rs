use super::teams::{UNKNOWN_TEAM, team_for};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub championships: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub podiums: u32,
    #[serde(default)]
    pub starts: u32,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub rookie: bool,
}

impl Driver {
    /// Build a driver with no recorded statistics.
    pub fn new(name: &str, team: &str) -> Self {
        Self {
            name: name.to_owned(),
            team: team.to_owned(),
            championships: 0,
            wins: 0,
            podiums: 0,
            starts: 0,
            points: 0.0,
            rookie: false,
        }
    }

    pub fn is_champion(&self) -> bool {
        self.championships > 0
    }

    /// Fill an empty team from the known 2026 lineup, or mark it as
    /// to be confirmed.
    pub fn with_known_team(mut self) -> Self {
        if self.team.trim().is_empty() {
            self.team = team_for(&self.name).unwrap_or(UNKNOWN_TEAM).to_owned();
        }
        self
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_known_team() {
        let d = Driver::new("Lando Norris", "").with_known_team();
        assert_eq!(d.team, "McLaren");
        let d = Driver::new("Franco Colapinto", " ").with_known_team();
        assert_eq!(d.team, UNKNOWN_TEAM);
        let d = Driver::new("Lando Norris", "Williams").with_known_team();
        assert_eq!(d.team, "Williams");
    }

    #[test]
    fn test_display() {
        let d = Driver::new("Oscar Piastri", "McLaren");
        assert_eq!(d.to_string(), "Oscar Piastri (McLaren)");
        assert!(!d.is_champion());
    }
}
