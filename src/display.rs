use crate::model::Driver;
use crate::ranking;
use crate::stats;

pub fn display_ranking(ranked: &[&Driver]) {
    println!("Standings:");
    for (position, d) in ranking::positions(ranked) {
        print!(
            "  {:>2}. {} [{}] - {} titles, {} wins, {} podiums, {} starts, {} points",
            position, d.name, d.team, d.championships, d.wins, d.podiums, d.starts, d.points
        );
        if d.rookie {
            print!(" (rookie)");
        }
        println!();
    }
}

pub fn display_stats(drivers: &[Driver]) {
    let total = drivers.len();
    let rookies = drivers.iter().filter(|d| d.rookie).count();
    println!(
        "Drivers experienced/rookie/total: {}/{}/{}",
        total - rookies,
        rookies,
        total
    );
    let champions = drivers.iter().filter(|d| d.is_champion()).count();
    let wins: u32 = drivers.iter().map(|d| d.wins).sum();
    let podiums: u32 = drivers.iter().map(|d| d.podiums).sum();
    println!(
        "World champions: {}, career wins: {}, career podiums: {}",
        champions, wins, podiums
    );
}

pub fn display_teams(ranked: &[&Driver]) {
    for (team, members) in stats::drivers_by_team(ranked) {
        println!("{}:", team);
        for d in members {
            print!("  - {}", d.name);
            if d.rookie {
                print!(" (rookie)");
            }
            println!();
        }
        println!();
    }
}

pub fn display_team_standings(drivers: &[Driver]) {
    let standings = stats::team_standings(drivers);
    if !standings.is_empty() {
        println!("Team standings:");
        for (position, (team, points)) in standings.iter().enumerate() {
            println!("  {:>2}. {} ({} points)", position + 1, team, points);
        }
    }
}
