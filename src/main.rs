use crate::config::{Config, get_config, get_config_or};
use crate::loaders::*;
use crate::model::{Driver, Roster};
use clap::Parser;
use eyre::{Error, WrapErr, bail};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, info, warn};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

mod checks;
mod config;
mod display;
mod export;
mod loaders;
mod model;
mod ranking;
mod stats;

const DEFAULT_CONFIG: &str = "f1rank.toml";

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Use FILE instead of f1rank.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Driver source (csv, http, database or fixture)
    #[arg(short, long, value_name = "KIND")]
    source: Option<String>,
    /// Export the ranking as CSV to FILE
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Fail if driver records are inconsistent
    #[arg(long)]
    strict: bool,
    /// Also display drivers and points per team
    #[arg(long)]
    teams: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(Targets::new().with_target("f1rank", level))
        .init();
}

/// Load the configuration file. The default file is optional, an explicitly
/// requested one is not.
fn load_config(file_name: Option<&Path>) -> Result<Config, Error> {
    match file_name {
        Some(file_name) => Config::load(file_name),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG),
        None => Ok(Config::default()),
    }
}

fn make_loader(config: &Config, kind: &str) -> Result<Box<dyn Loader>, Error> {
    let required = |section: &str, key: &str| {
        get_config(config, section, key).ok_or_else(|| {
            eyre::eyre!("{section}.{key} configuration parameter is required by the {kind} loader")
        })
    };
    let loader: Box<dyn Loader> = match kind {
        "csv" => Box::new(CsvLoader::new(required("csv", "file")?)),
        "http" => {
            let timeout =
                get_config_or(config, "http", "timeout_secs", DEFAULT_TIMEOUT.as_secs())?;
            Box::new(HttpLoader::new(
                &required("http", "url")?,
                Duration::from_secs(timeout),
            )?)
        }
        "database" => Box::new(DatabaseLoader::new(&required("database", "url")?)),
        "fixture" => Box::new(FixtureLoader),
        other => bail!("unknown loader: {}", other),
    };
    Ok(loader)
}

/// Load drivers from `loader`, substituting the built-in lineup on failure
/// when `fallback` is set.
async fn load_drivers(loader: &mut dyn Loader, fallback: bool) -> Result<Vec<Driver>, Error> {
    match loader.load().await {
        Ok(drivers) => {
            info!(source = loader.name(), count = drivers.len(), "drivers loaded");
            Ok(drivers)
        }
        Err(e) if fallback => {
            warn!(source = loader.name(), error = %e, "cannot load drivers, using built-in lineup");
            Ok(FixtureLoader::drivers())
        }
        Err(e) => Err(e).wrap_err_with(|| format!("cannot load drivers from {}", loader.name())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);
    let config = load_config(args.config.as_deref())?;
    let kind = match args.source {
        Some(kind) => kind,
        None => get_config(&config, "source", "loader").unwrap_or_else(|| "fixture".to_owned()),
    };
    let fallback = get_config_or(&config, "source", "fallback_to_fixture", false)?;
    let mut loader = make_loader(&config, &kind)?;
    let mut roster = Roster::new();
    roster.load(load_drivers(loader.as_mut(), fallback).await?);
    let (Some(drivers), Some(ranked)) = (roster.drivers(), roster.ranked()) else {
        bail!("driver roster has not been loaded");
    };
    if args.strict {
        checks::ensure_consistent(drivers)?;
    } else {
        checks::check_consistency(drivers);
    }
    display::display_ranking(&ranked);
    display::display_stats(drivers);
    if args.teams {
        println!();
        display::display_teams(&ranked);
        display::display_team_standings(drivers);
    }
    if let Some(output) = &args.output {
        export::save_ranking(output, &ranked)?;
        info!(path = %output.display(), "ranking exported");
    }
    Ok(())
}
