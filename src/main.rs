use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::process::ExitCode;

use iss_flyover::report;
use iss_flyover::{Config, Coordinates, FlyoverFinder, PassWindow, ReqwestClient};

#[derive(Parser)]
#[command(name = "iss-flyover")]
#[command(about = "Upcoming ISS passes over your current location")]
struct Cli {
    /// YAML file overriding endpoints and timeout
    #[arg(long, global = true)]
    config: Option<String>,
    /// Log every request at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the next passes for this machine's location
    Next {
        #[arg(long)]
        json: bool,
    },
    /// Print this machine's public IP
    Ip,
    /// Resolve an IP (this machine's if omitted) to coordinates
    Coords { ip: Option<String> },
    /// Find the next passes for explicit coordinates
    Passes {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => return fail(format!("reading {}: {}", path, e)),
        },
        None => Config::default(),
    };

    let timeout = match config.timeout() {
        Ok(t) => t,
        Err(e) => return fail(e),
    };
    let client = match ReqwestClient::new(timeout) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };
    let finder = FlyoverFinder::new(client, config.endpoints);

    match cli.command.unwrap_or(Commands::Next { json: false }) {
        Commands::Next { json } => match finder.next_passes_for_my_location().await {
            Ok(passes) => print_passes(&passes, json),
            Err(e) => fail(e),
        },
        Commands::Ip => match finder.my_ip().await {
            Ok(ip) => {
                println!("{}", ip);
                ExitCode::SUCCESS
            }
            Err(e) => fail(e),
        },
        Commands::Coords { ip } => {
            let ip = match ip {
                Some(ip) => ip,
                None => match finder.my_ip().await {
                    Ok(ip) => ip,
                    Err(e) => return fail(e),
                },
            };
            match finder.coords_for(&ip).await {
                Ok(coords) => {
                    println!("{}, {}", coords.latitude, coords.longitude);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(e),
            }
        }
        Commands::Passes { lat, lon, json } => {
            let coords = Coordinates {
                latitude: lat,
                longitude: lon,
            };
            match finder.flyovers_at(&coords).await {
                Ok(passes) => print_passes(&passes, json),
                Err(e) => fail(e),
            }
        }
    }
}

fn print_passes(passes: &[PassWindow], json: bool) -> ExitCode {
    if !json {
        println!("{}", report::render(passes));
        return ExitCode::SUCCESS;
    }
    match serde_json::to_string_pretty(passes) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn fail(e: impl Display) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::FAILURE
}
