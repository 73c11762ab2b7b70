//! morningstar CLI - Query the Morningstar financial data service.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use morningstar_lib::MorningstarClient;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "morningstar")]
#[command(about = "Query prices, FX rates and metadata from Morningstar", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file. Defaults to ./config-morningstar.yml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: Format,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the currencies an instrument trades in
    Currencies {
        /// Instrument identifier (e.g., 182.1.NESN)
        instrument: String,
    },

    /// Show the metadata record of an instrument
    Meta {
        /// Instrument identifier (e.g., 182.1.NESN)
        instrument: String,
    },

    /// Find instruments listed for an ISIN in a currency
    Find {
        /// ISIN code (e.g., CH0038863350)
        isin: String,

        /// Currency code (e.g., CHF)
        currency: String,
    },

    /// Show daily prices of an instrument
    Prices {
        /// Instrument identifier (e.g., 182.1.NESN)
        instrument: String,

        /// Start date (DD-MM-YYYY)
        #[arg(short, long)]
        start: String,

        /// End date (DD-MM-YYYY)
        #[arg(short, long)]
        end: String,
    },

    /// Show daily prices of the listing with the most data for an ISIN
    MostAvailable {
        /// ISIN code (e.g., CH0038863350)
        isin: String,

        /// Currency code (e.g., CHF)
        currency: String,

        /// Start date (DD-MM-YYYY)
        #[arg(short, long)]
        start: String,

        /// End date (DD-MM-YYYY)
        #[arg(short, long)]
        end: String,
    },

    /// Show daily exchange rates of a currency pair
    Fx {
        /// Base currency (e.g., USD)
        base: String,

        /// Counter currency (e.g., CHF)
        counter: String,

        /// Start date (DD-MM-YYYY)
        #[arg(short, long)]
        start: String,

        /// End date (DD-MM-YYYY)
        #[arg(short, long)]
        end: String,
    },
}

/// Install the log subscriber. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let client = MorningstarClient::new(config::load(cli.config.as_deref())?)?;
    let format = cli.format;

    match command {
        Commands::Currencies { instrument } => {
            commands::currencies::show_currencies(&client, &instrument, format).await
        }
        Commands::Meta { instrument } => {
            commands::meta::show_meta(&client, &instrument, format).await
        }
        Commands::Find { isin, currency } => {
            commands::find::find_instruments(&client, &isin, &currency, format).await
        }
        Commands::Prices {
            instrument,
            start,
            end,
        } => commands::prices::show_prices(&client, &instrument, &start, &end, format).await,
        Commands::MostAvailable {
            isin,
            currency,
            start,
            end,
        } => {
            commands::prices::show_most_available(&client, &isin, &currency, &start, &end, format)
                .await
        }
        Commands::Fx {
            base,
            counter,
            start,
            end,
        } => commands::fx::show_fx(&client, &base, &counter, &start, &end, format).await,
    }
}
