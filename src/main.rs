//! Hangman - CLI
//!
//! Guess the hidden word one character at a time. Words come from a remote
//! word service (timed) or a local list (untimed).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, WordSupply, run_play},
    core::GameError,
    output::print_session_report,
    source::{local::DEFAULT_WORD_LIST, remote::DEFAULT_URL},
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one character at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer each prompt with a single key press instead of a line
    #[arg(short, long, global = true)]
    keys: bool,

    /// Print a session summary to stderr when the game ends
    #[arg(short, long, global = true)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the word from a remote word service (default, timed)
    Remote {
        /// Word service endpoint
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,

        /// Seconds to wait for the word service
        #[arg(long, default_value = "10")]
        fetch_timeout: u64,

        /// Session time budget in seconds
        #[arg(short, long, default_value = "30")]
        time_limit: f64,

        /// Play without a time budget
        #[arg(long, conflicts_with = "time_limit")]
        no_timer: bool,
    },

    /// Pick the word from a local word list (untimed unless asked)
    Local {
        /// Newline-separated word list
        #[arg(short, long, default_value = DEFAULT_WORD_LIST)]
        word_list: PathBuf,

        /// Session time budget in seconds
        #[arg(short, long)]
        time_limit: Option<f64>,
    },
}

/// Convert a seconds flag into a budget
fn time_limit(seconds: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds)
        .with_context(|| format!("invalid time limit: {seconds} seconds"))
}

/// Build the session configuration from parsed flags
fn build_config(cli: &Cli) -> Result<PlayConfig> {
    let default = Commands::Remote {
        url: DEFAULT_URL.to_string(),
        fetch_timeout: 10,
        time_limit: 30.0,
        no_timer: false,
    };
    let command = cli.command.as_ref().unwrap_or(&default);

    let mut config = match command {
        Commands::Remote {
            url,
            fetch_timeout,
            time_limit: seconds,
            no_timer,
        } => {
            let mut config = PlayConfig::remote();
            config.supply = WordSupply::Remote {
                url: url.clone(),
                fetch_timeout: Duration::from_secs(*fetch_timeout),
            };
            config.time_limit = if *no_timer {
                None
            } else {
                Some(time_limit(*seconds)?)
            };
            config
        }
        Commands::Local {
            word_list,
            time_limit: seconds,
        } => {
            let mut config = PlayConfig::local(word_list.clone());
            config.time_limit = seconds.map(time_limit).transpose()?;
            config
        }
    };

    config.raw_keys = cli.keys;
    Ok(config)
}

/// Log to stderr so stdout carries only the game
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(2);
        }
    };

    match run_play(&config) {
        Ok(report) => {
            if cli.summary {
                print_session_report(&report);
            }
            ExitCode::SUCCESS
        }
        // The apology has already been shown to the player
        Err(GameError::Supply(_)) => ExitCode::FAILURE,
        Err(err @ GameError::Io(_)) => {
            eprintln!("\nerror: {err}");
            ExitCode::from(2)
        }
    }
}
