//! Tianji CLI - Four Pillars charts and hexagram readings
//!
//! Computes locally by default; `--server` (or TIANJI_SERVER_URL, or
//! `base_url` in the config file) sends requests to a running Tianji API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tianji::{FourPillarsChart, HexagramResult};

use api::TianjiClient;
use config::{Config, OutputFormat, SERVER_URL_ENV};

#[derive(Parser)]
#[command(name = "tianji")]
#[command(about = "Tianji CLI - Four Pillars (八字) and hexagram (六爻) readings", long_about = None)]
#[command(version)]
struct Cli {
    /// Tianji server URL (overrides TIANJI_SERVER_URL and the config file)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Ignore any configured server and compute locally
    #[arg(long, global = true, conflicts_with = "server")]
    local: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lunar date and Four Pillars for a Gregorian birth moment
    Bazi {
        /// Gregorian year (1900-2049)
        year: i32,
        /// Month, 1-12
        month: u32,
        /// Day of month
        day: u32,
        /// Hour of day, 0-23
        hour: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Toss three coins six times and read the hexagram
    Hexagram {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Seed the coin tosses for a reproducible reading
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check that the configured server is reachable
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default server URL
    SetServer {
        /// Server base URL, e.g. http://localhost:8000
        url: String,
    },
    /// Forget the default server (compute locally)
    ClearServer,
    /// Set the default output format (text or json)
    SetFormat {
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let server = if cli.local {
        None
    } else {
        let env = std::env::var(SERVER_URL_ENV).ok();
        config.resolve_server(cli.server.as_deref(), env.as_deref())
    };
    let client = server.as_deref().map(TianjiClient::new);

    match cli.command {
        Commands::Bazi {
            year,
            month,
            day,
            hour,
            json,
        } => {
            let format = output_format(&config, json);
            cmd_bazi(client.as_ref(), year, month, day, hour, format).await
        }
        Commands::Hexagram { json, seed } => {
            let format = output_format(&config, json);
            cmd_hexagram(client.as_ref(), seed, format).await
        }
        Commands::Health => cmd_health(client.as_ref()).await,
        Commands::Config { action } => cmd_config(config, action.unwrap_or(ConfigAction::Show)),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(config: &Config, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        config.default_format
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", text);
    Ok(())
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_bazi(
    client: Option<&TianjiClient>,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    format: OutputFormat,
) -> Result<()> {
    let chart: FourPillarsChart = match client {
        Some(client) => {
            tracing::info!("Calculating chart via {}", client.base_url());
            client.calculate_bazi(year, month, day, hour).await?
        }
        None => tianji::calculate_bazi(year, month, day, hour)?,
    };

    match format {
        OutputFormat::Json => print_json(&chart),
        OutputFormat::Text => {
            print!("{}", tianji::format_bazi(&chart));
            println!("\n{} {}", "八字".bold(), chart.full_bazi.cyan().bold());
            Ok(())
        }
    }
}

async fn cmd_hexagram(
    client: Option<&TianjiClient>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let result: HexagramResult = match (client, seed) {
        // Seeded tosses happen here; the server only interprets them
        (Some(client), Some(seed)) => {
            let tossed = tianji::generate_hexagram(&mut StdRng::seed_from_u64(seed));
            client.generate_hexagram(Some(tossed.lines.as_slice())).await?
        }
        (Some(client), None) => {
            tracing::info!("Requesting reading from {}", client.base_url());
            client.generate_hexagram(None).await?
        }
        (None, Some(seed)) => tianji::generate_hexagram(&mut StdRng::seed_from_u64(seed)),
        (None, None) => tianji::generate_random_hexagram(),
    };

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            print!("{}", tianji::format_hexagram(&result));
            let headline = if result.summary.has_changes {
                format!(
                    "{} → {}",
                    result.main_hexagram.name, result.changed_hexagram.name
                )
            } else {
                result.main_hexagram.name.clone()
            };
            println!("\n{} {}", "卦".bold(), headline.cyan().bold());
            Ok(())
        }
    }
}

async fn cmd_health(client: Option<&TianjiClient>) -> Result<()> {
    let Some(client) = client else {
        bail!(
            "No server configured. Pass --server <url>, set {}, or run 'tianji config set-server <url>'.",
            SERVER_URL_ENV
        );
    };

    print!("Checking {}... ", client.base_url());

    match client.health().await {
        Ok(health) if health.status == "ok" => {
            println!("{}", "OK".green());
            println!("  {} (v{})", health.message.dimmed(), health.version);
            Ok(())
        }
        Ok(health) => {
            println!("{}", "Degraded".yellow());
            bail!("Server reported status '{}'", health.status);
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

fn cmd_config(mut config: Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!(
                "  Server: {}",
                match &config.base_url {
                    Some(url) => url.cyan(),
                    None => "None (local)".dimmed(),
                }
            );
            println!("  Default Format: {}", config.default_format);
            if let Ok(url) = std::env::var(SERVER_URL_ENV) {
                println!("  {} overrides server: {}", SERVER_URL_ENV, url.yellow());
            }
        }

        ConfigAction::SetServer { url } => {
            let url = url.trim().trim_end_matches('/').to_string();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("Server URL must start with http:// or https://");
            }
            config.base_url = Some(url.clone());
            config.save()?;
            println!("{} Default server set to {}", "✓".green(), url);
        }

        ConfigAction::ClearServer => {
            config.base_url = None;
            config.save()?;
            println!("{} Default server cleared - computing locally", "✓".green());
        }

        ConfigAction::SetFormat { format } => {
            config.default_format = format;
            config.save()?;
            println!("{} Default format set to {}", "✓".green(), format);
        }
    }

    Ok(())
}
