//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

mod error;

use clap::{Parser, Subcommand};
use reliefwatch_core::{AggregationResult, BatchAggregator};
use reliefwatch_data::{
    DEFAULT_REPORT_LIMIT, NominatimClient, NominatimConfig, ReliefWebClient, ReliefWebConfig,
};
use serde_json::json;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "reliefwatch", about = "Score ReliefWeb reports for disaster relevance")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch and score reports for a location.
    Check(CheckArgs),
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    /// Latitude in decimal degrees.
    #[arg(long)]
    lat: f64,
    /// Longitude in decimal degrees.
    #[arg(long)]
    lon: f64,
    /// Maximum number of reports to fetch.
    #[arg(long, default_value_t = DEFAULT_REPORT_LIMIT)]
    limit: u32,
    /// Skip reverse geocoding and query this country directly.
    #[arg(long)]
    country: Option<String>,
    /// Override the ReliefWeb application identifier.
    #[arg(long)]
    appname: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("reliefwatch: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    match cli.command {
        Command::Check(args) => runtime.block_on(check(args)),
    }
}

async fn check(args: CheckArgs) -> Result<(), CliError> {
    let country = match args.country {
        Some(country) => country,
        None => resolve_country(args.lat, args.lon).await?,
    };

    let config = args
        .appname
        .map_or_else(ReliefWebConfig::default, |appname| {
            ReliefWebConfig::default().with_appname(appname)
        });
    let client = ReliefWebClient::with_config(config)?;
    let raw = client.try_fetch_reports(&country, args.limit).await?;
    let result = BatchAggregator::default().aggregate(&raw);

    println!("{}", render(&country, &result)?);
    Ok(())
}

async fn resolve_country(lat: f64, lon: f64) -> Result<String, CliError> {
    let geocoder = NominatimClient::with_config(NominatimConfig::default())?;
    geocoder
        .try_resolve_country(lat, lon)
        .await?
        .ok_or(CliError::UnknownCountry {
            latitude: lat,
            longitude: lon,
        })
}

fn render(country: &str, result: &AggregationResult) -> Result<String, CliError> {
    let value = json!({
        "country": country,
        "total_fetched": result.total_fetched,
        "disasters_found": result.disasters_found,
        "all_reports": result.all_reports,
        "disaster_reports": result.disaster_reports,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use reliefwatch_core::AggregationResult;
    use rstest::rstest;

    use super::{Cli, Command, render};

    #[rstest]
    fn check_parses_coordinates_and_defaults() {
        let cli = Cli::parse_from(["reliefwatch", "check", "--lat", "23.8", "--lon", "90.4"]);
        let Command::Check(args) = cli.command;
        assert!((args.lat - 23.8).abs() < f64::EPSILON);
        assert!((args.lon - 90.4).abs() < f64::EPSILON);
        assert_eq!(args.limit, 100);
        assert!(args.country.is_none());
    }

    #[rstest]
    fn check_accepts_country_override() {
        let cli = Cli::parse_from([
            "reliefwatch",
            "check",
            "--lat",
            "0",
            "--lon",
            "0",
            "--country",
            "Chile",
            "--limit",
            "10",
        ]);
        let Command::Check(args) = cli.command;
        assert_eq!(args.country.as_deref(), Some("Chile"));
        assert_eq!(args.limit, 10);
    }

    #[rstest]
    fn render_emits_summary_fields() {
        let text = render("Chile", &AggregationResult::default()).expect("renders");
        assert!(text.contains("\"country\": \"Chile\""));
        assert!(text.contains("\"total_fetched\": 0"));
        assert!(text.contains("\"disaster_reports\": []"));
    }
}
