mod commands;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commands::Terminal;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use terminal_core::{init_logging, AppConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "terminal")]
#[command(about = "Black Rock payment terminal validation and printing tools")]
struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate payment form fields
    Validate {
        /// Field value as name=value (e.g. cardNumber=4242424242424242)
        #[arg(long = "field", value_parser = commands::validate::parse_field)]
        fields: Vec<(String, String)>,

        /// Selected authorization protocol
        #[arg(long)]
        protocol: Option<String>,

        /// JSON object of field values
        #[arg(long)]
        form: Option<PathBuf>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a card number and detect its network
    Card {
        /// Card number, spaces allowed
        number: String,
    },

    /// List authorization protocols and their code lengths
    Protocols,

    /// Write an amount out in words
    Words {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Render a receipt for one transaction
    Receipt {
        /// Transaction JSON file
        file: PathBuf,

        /// Print settings JSON file
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Render a report for a list of transactions
    Report {
        /// JSON array of transactions
        file: PathBuf,

        /// Only include transactions with this status
        #[arg(long)]
        status: Option<String>,

        /// First day included (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day included (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Print settings JSON file
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::from_env().context("Failed to load terminal configuration")?;

    let mut logging = LoggingConfig::for_app(&config);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    init_logging(logging).map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let terminal = Terminal::load(config)?;
    let mut out = io::stdout().lock();

    let ok = match cli.command {
        Commands::Validate {
            fields,
            protocol,
            form,
            json,
        } => commands::validate::run(&terminal, fields, protocol, form.as_deref(), json, &mut out)?,
        Commands::Card { number } => commands::card::run(&terminal, &number, &mut out)?,
        Commands::Protocols => {
            commands::protocols::run(&terminal, &mut out)?;
            true
        }
        Commands::Words { amount } => {
            commands::print::words(amount, &mut out)?;
            true
        }
        Commands::Receipt { file, settings } => {
            commands::print::receipt(&file, settings.as_deref(), &mut out)?;
            true
        }
        Commands::Report {
            file,
            status,
            from,
            to,
            settings,
        } => {
            commands::print::report(&file, status, from, to, settings.as_deref(), &mut out)?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
