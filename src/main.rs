//! Main entry point for the league-elo command line tool
//!
//! Loads a season/week match archive from a JSON file, folds it through
//! the Elo rating engine, and prints the ranked standings table or a
//! single team's rating trajectory.

use anyhow::Result;
use clap::Parser;
use league_elo::config::AppConfig;
use league_elo::dataset;
use league_elo::rating::{EloRatingCalculator, RatingEngine};
use league_elo::report;
use league_elo::types::LeagueRatings;
use league_elo::TeamNameNormalizer;
use std::path::PathBuf;
use tracing::{error, info};

/// League Elo - rating tables and rating histories from match archives
#[derive(Parser)]
#[command(
    name = "league-elo",
    version,
    about = "Compute Elo ratings and rating histories from a season/week match archive",
    long_about = "league-elo reads a JSON archive of match results grouped by season and week, \
                 applies the classic pairwise Elo update rule match by match in archive order, \
                 and reports final standings plus each team's full rating trajectory."
)]
struct Args {
    /// Path to the JSON match archive
    #[arg(value_name = "DATASET")]
    dataset: PathBuf,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Show only the highest-rated teams
    #[arg(long, value_name = "N", help = "Limit the standings table to the top N teams")]
    top: Option<usize>,

    /// Print one team's rating trajectory instead of the standings
    #[arg(short, long, value_name = "NAME", help = "Team to show the rating history for")]
    team: Option<String>,

    /// Emit machine-readable JSON instead of a table
    #[arg(long, help = "Emit JSON output")]
    json: bool,

    /// Dry run mode (validate config and dataset, then exit)
    #[arg(long, help = "Validate configuration and dataset, then exit without computing")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
        league_elo::config::validate_config(&config)?;
    }

    Ok(config)
}

fn print_standings(result: &LeagueRatings, top: Option<usize>, json: bool) -> Result<()> {
    let mut table = report::standings(result);
    if let Some(limit) = top {
        table.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("{:>4}  {:<32} {:>6}", "Rank", "Team", "Elo");
    for row in &table {
        println!("{:>4}  {:<32} {:>6}", row.rank, row.team, row.rating);
    }

    Ok(())
}

fn print_team_history(result: &LeagueRatings, team: &str, json: bool) -> Result<()> {
    let series = report::team_series(result, team)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!("Rating history for {}", series.team);
    for point in &series.points {
        println!("{:<24} {:>8.1}", point.label, point.rating);
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override file/environment)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    // Load the archive before building anything else; a missing or
    // malformed file is the common failure mode
    let seasons = match dataset::load_seasons(&args.dataset) {
        Ok(seasons) => seasons,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        info!(
            "Dry run: configuration valid, {} seasons loaded from {}",
            seasons.len(),
            args.dataset.display()
        );
        return Ok(());
    }

    let normalizer = TeamNameNormalizer::new(config.naming.clone());
    let calculator = EloRatingCalculator::new(config.rating.clone())?;
    let engine = RatingEngine::new(normalizer, calculator);

    let result = engine.compute(&seasons);
    info!("Rated {} teams", result.team_count());

    match &args.team {
        Some(team) => print_team_history(&result, team, args.json)?,
        None => print_standings(&result, args.top, args.json)?,
    }

    Ok(())
}
