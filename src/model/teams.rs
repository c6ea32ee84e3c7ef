/// Team name used when a driver cannot be matched to a known seat.
pub const UNKNOWN_TEAM: &str = "TBC";

const KNOWN_TEAMS: &[(&str, &str)] = &[
    ("Verstappen", "Red Bull"),
    ("Leclerc", "Ferrari"),
    ("Norris", "McLaren"),
    ("Piastri", "McLaren"),
    ("Hamilton", "Ferrari"),
    ("Russell", "Mercedes"),
    ("Alonso", "Aston Martin"),
    ("Antonelli", "Mercedes"),
    ("Bearman", "Haas"),
    ("Bortoleto", "Sauber"),
];

/// Return the 2026 constructor of a driver, matched on the surname appearing
/// anywhere in `name`.
pub fn team_for(name: &str) -> Option<&'static str> {
    KNOWN_TEAMS
        .iter()
        .find(|(surname, _)| name.contains(surname))
        .map(|&(_, team)| team)
}

#[test]
fn test_team_for() {
    assert_eq!(team_for("Max Verstappen"), Some("Red Bull"));
    assert_eq!(team_for("Kimi Antonelli"), Some("Mercedes"));
    assert_eq!(team_for("Isack Hadjar"), None);
    assert_eq!(team_for(""), None);
}
