use anyhow::Result;
use clap::{Parser, Subcommand};
use pinnacle_rs::{Config, MatchupOdds, PinnacleApiClient, StatusDetails};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pinnacle")]
#[command(about = "Pinnacle guest API CLI", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    /// API key to start with (overrides the config file)
    #[arg(short, long)]
    token: Option<String>,
    /// Print raw JSON instead of tables
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show API service status
    Status,
    /// Show straight markets for a league
    Odds {
        /// League ID (e.g. 487 for NBA)
        league_id: u64,
    },
    /// Discover and print the current guest API key
    ApiKey,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tokio::runtime::Runtime::new()?.block_on(run(cli))
}

fn load_config(cli: &Cli) -> Result<Config> {
    if !cli.config.exists() {
        warn!(
            "Config file {} not found, using default endpoints",
            cli.config.display()
        );
        return Ok(Config::default());
    }
    Config::from_path(&cli.config)
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli)?;
    if cli.token.is_some() {
        config.pinnacle.api_key = cli.token.clone();
    }

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.pinnacle.timeout() {
        builder = builder.timeout(timeout);
    }
    let mut client = PinnacleApiClient::with_config(config.pinnacle, Some(builder.build()?));

    match cli.command {
        Commands::Status => {
            if client.authorization_token().is_empty() {
                info!("No API key configured, discovering one first...");
                let details = client.fetch_application_details().await?;
                client.set_authorization_token(details.into_api_key());
            }
            let status = client.fetch_status().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status(&status);
            }
        }
        Commands::Odds { league_id } => {
            info!("Fetching straight markets for league {}...", league_id);
            let odds = client.fetch_league_straight_odds(league_id).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&odds)?);
            } else {
                print_odds(league_id, &odds);
            }
        }
        Commands::ApiKey => {
            let details = client.fetch_application_details().await?;
            println!("{}", details.api_key());
        }
    }

    Ok(())
}

fn print_status(status: &StatusDetails) {
    println!("\n{}", "=".repeat(60));
    println!(
        "Status: {} | Time: {}",
        status.code,
        chrono::Local::now().format("%H:%M:%S")
    );
    println!("{}", status.description);
    println!("{}", "-".repeat(60));

    println!("{:<24} {:<12}", "Service", "Status");
    for service in &status.services {
        println!("{:<24} {:<12}", service.name, service.status);
    }

    println!("\n{:<24} {:<12} {:<12}", "Upstream", "Health", "Status");
    for upstream in &status.upstream_services {
        println!(
            "{:<24} {:<12} {:<12}",
            upstream.name, upstream.health, upstream.status
        );
    }

    let degraded: Vec<&str> = status
        .degraded_services()
        .map(|s| s.name.as_str())
        .collect();
    if !degraded.is_empty() {
        println!("\nDegraded: {}", degraded.join(", "));
    }
}

fn print_odds(league_id: u64, odds: &[MatchupOdds]) {
    println!("\n{}", "=".repeat(80));
    println!(
        "League: {} | Time: {} | Markets: {}",
        league_id,
        chrono::Local::now().format("%H:%M:%S"),
        odds.len()
    );
    println!("{}", "-".repeat(80));

    for market in odds {
        println!(
            "\nMatchup {} | {} ({}) | v{}",
            market.matchup_id, market.key, market.market_type, market.version
        );
        println!(
            "{:^14} {:>8} {:>8} {:>8}",
            "Participant", "Points", "Price", "Decimal"
        );
        for price in &market.prices {
            let decimal = price
                .decimal_odds()
                .map(|d| format!("{d:.3}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:^14} {:>8} {:>8} {:>8}",
                price.participant_id, price.points, price.price, decimal
            );
        }
    }
}
