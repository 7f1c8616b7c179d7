//! User Service - in-memory user registry command-line entry point.

use std::io;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::UserServiceConfig;
use user_service_lib::shell::parse_date;
use user_service_lib::Action;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(author, version, about = "In-memory user registry", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with the initial users (overrides USER_SERVICE_SEED_FILE)
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every seeded user
    List,
    /// Check whether a date is the birthday of the given person (does not accept --seed)
    Check {
        /// Person's name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long, value_parser = date_arg)]
        birth_date: NaiveDate,
        /// Date to compare against (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = date_arg)]
        on: Option<NaiveDate>,
    },
    /// Print seeded users whose birthday falls on a date
    Birthdays {
        /// Date to look up (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = date_arg)]
        on: Option<NaiveDate>,
    },
    /// Start an interactive shell on stdin/stdout
    Shell,
}

fn date_arg(input: &str) -> Result<NaiveDate, String> {
    parse_date(input).map_err(|e| e.to_string())
}

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();

    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(?config, "Configuration loaded");

    let today = Local::now().date_naive();
    let action = match cli.command {
        Commands::List => Action::List,
        Commands::Check {
            name,
            birth_date,
            on,
        } => Action::Check {
            name,
            birth_date,
            on: on.unwrap_or(today),
        },
        Commands::Birthdays { on } => Action::Birthdays {
            on: on.unwrap_or(today),
        },
        Commands::Shell => Action::Shell,
    };

    // The configured seed file only applies to commands that read it
    let seed_file = match action {
        Action::Check { .. } => cli.seed,
        _ => cli.seed.or(config.seed_file),
    };
    let result = user_service_lib::run_action(
        action,
        seed_file.as_deref(),
        io::stdin().lock(),
        io::stdout().lock(),
    );

    // Handle errors
    if let Err(e) = result {
        if e.is_client_error() {
            eprintln!("error: {}", e.user_message());
        } else {
            tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        }
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber (verbose mode sets debug level); logs go to stderr
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string())
    };
    let filter = tracing_subscriber::EnvFilter::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
