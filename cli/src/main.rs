//! Command-line interface for the Notehub note service.
//!
//! Commands:
//! - get: Retrieve a note by ID
//! - create: Publish a new note
//! - update: Replace the text of a password-protected note
//!
//! Configuration via environment:
//! - NOTEHUB_PID: Publisher ID (required for create and update)
//! - NOTEHUB_PSK: Publisher secret key (required for create and update)
//! - NOTEHUB_API_VERSION: API version (default: 1.1)
//! - NOTEHUB_LOG: Log filter when RUST_LOG is unset (default: warn)

mod commands;

use clap::{Parser, Subcommand};
use notehub_client::{ClientConfig, ConfigError};
use notehub_core::{Credentials, DEFAULT_API_VERSION};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{create::CreateArgs, get::GetArgs, update::UpdateArgs};

/// Notehub CLI
///
/// Publish and fetch Markdown notes on Notehub. Prints the service's JSON
/// response by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notehub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Publisher ID issued by Notehub
    #[arg(long, env = "NOTEHUB_PID", global = true, hide_env_values = true)]
    pid: Option<String>,

    /// Publisher secret key issued by Notehub
    #[arg(long, env = "NOTEHUB_PSK", global = true, hide_env_values = true)]
    psk: Option<String>,

    /// API version to request
    #[arg(
        long,
        env = "NOTEHUB_API_VERSION",
        default_value = DEFAULT_API_VERSION,
        global = true
    )]
    api_version: String,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, env = "NOTEHUB_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve a note
    Get(GetArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Update a note created with a password
    Update(UpdateArgs),
}

fn main() {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let config = match client_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(api_version = %config.api_version, "configuration loaded");

    let client = config.into_client();

    let result = match cli.command {
        Commands::Get(args) => commands::get::execute(&client, cli.human, args),
        Commands::Create(args) => commands::create::execute(&client, cli.human, args),
        Commands::Update(args) => commands::update::execute(&client, cli.human, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Validate the credentials and API version taken from flags or environment.
fn client_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let credentials = Credentials::new(
        cli.pid.clone().unwrap_or_default(),
        cli.psk.clone().unwrap_or_default(),
    );
    ClientConfig::new(credentials, cli.api_version.as_str())
}

/// Initialize the tracing subscriber on stderr.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
