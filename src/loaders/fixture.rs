use super::{FetchError, Loader, finish};
use crate::model::Driver;
use async_trait::async_trait;

/// The 2026 lineup with career statistics, available without any network or
/// file access.
pub struct FixtureLoader;

#[rustfmt::skip]
const LINEUP: &[(&str, &str, u32, u32, u32, u32, f64, bool)] = &[
    ("Max Verstappen",    "Red Bull",     4,  62, 109, 201, 2857.0, false),
    ("Charles Leclerc",   "Ferrari",      0,   9,  30, 145, 1078.0, false),
    ("Lando Norris",      "McLaren",      0,   2,  14, 120,  695.0, false),
    ("Oscar Piastri",     "McLaren",      0,   1,   8,  62,  385.0, false),
    ("George Russell",    "Mercedes",     0,   1,   9, 100,  471.0, false),
    ("Lewis Hamilton",    "Ferrari",      7, 105, 202, 380, 4789.0, false),
    ("Kimi Antonelli",    "Mercedes",     0,   0,   0,   0,    0.0, true),
    ("Oliver Bearman",    "Haas",         0,   0,   0,   0,    0.0, true),
    ("Gabriel Bortoleto", "Sauber",       0,   0,   0,   0,    0.0, true),
    ("Isack Hadjar",      "Racing Bulls", 0,   0,   0,   0,    0.0, true),
];

impl FixtureLoader {
    pub fn drivers() -> Vec<Driver> {
        LINEUP
            .iter()
            .map(
                |&(name, team, championships, wins, podiums, starts, points, rookie)| Driver {
                    championships,
                    wins,
                    podiums,
                    starts,
                    points,
                    rookie,
                    ..Driver::new(name, team)
                },
            )
            .collect()
    }
}

#[async_trait]
impl Loader for FixtureLoader {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn load(&mut self) -> Result<Vec<Driver>, FetchError> {
        finish(self.name(), Self::drivers())
    }
}
