use crate::model::Driver;
use crate::ranking;
use eyre::{Error, WrapErr};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 9] = [
    "position",
    "name",
    "team",
    "championships",
    "wins",
    "podiums",
    "starts",
    "points",
    "rookie",
];

/// One exported line. Fields follow `HEADER`.
#[derive(Serialize)]
struct RankedDriver<'a> {
    position: usize,
    name: &'a str,
    team: &'a str,
    championships: u32,
    wins: u32,
    podiums: u32,
    starts: u32,
    points: f64,
    rookie: bool,
}

impl<'a> RankedDriver<'a> {
    fn new(position: usize, d: &'a Driver) -> Self {
        Self {
            position,
            name: &d.name,
            team: &d.team,
            championships: d.championships,
            wins: d.wins,
            podiums: d.podiums,
            starts: d.starts,
            points: d.points,
            rookie: d.rookie,
        }
    }
}

/// Write the ranked drivers as CSV with a leading `position` column. The
/// header is written even when there is no driver.
pub fn write_ranking<W: Write>(writer: W, ranked: &[&Driver]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for (position, d) in ranking::positions(ranked) {
        wtr.serialize(RankedDriver::new(position, d))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_ranking(path: impl AsRef<Path>, ranked: &[&Driver]) -> Result<(), Error> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .wrap_err_with(|| format!("cannot create {}", path.display()))?;
    write_ranking(file, ranked).wrap_err_with(|| format!("cannot write ranking to {}", path.display()))
}
