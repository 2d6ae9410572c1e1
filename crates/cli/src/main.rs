//! SIT Bank CLI - Banking operations from command line
//!
//! Usage:
//! ```bash
//! sitbank open --kind savings --name "Asha" --deposit 1000
//! sitbank deposit 1 500
//! sitbank withdraw 1 200
//! sitbank interest 1
//! sitbank list
//! sitbank shell
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod state;

use commands::{account, shell, transaction};

/// SIT Bank - a minimal personal-banking ledger
#[derive(Parser)]
#[command(name = "sitbank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Snapshot file holding all accounts
    #[arg(long, default_value = "data/sitbank.json", global = true)]
    pub state: PathBuf,

    /// JSON config file (bank name, currency, interest rate, rounding)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the savings interest rate (0.04 = 4%)
    #[arg(long, global = true)]
    pub interest_rate: Option<Decimal>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a new account
    Open {
        /// Account type
        #[arg(long, short, default_value = "savings")]
        kind: AccountKindArg,
        /// Owner name
        #[arg(long, short)]
        name: String,
        /// Initial deposit
        #[arg(long, short, default_value = "0")]
        deposit: Decimal,
    },

    /// Show account details
    Show {
        /// Account number
        account_id: u64,
    },

    /// Deposit funds to an account
    Deposit {
        /// Account number
        account_id: u64,
        /// Amount to deposit
        amount: Decimal,
    },

    /// Withdraw funds from an account
    Withdraw {
        /// Account number
        account_id: u64,
        /// Amount to withdraw
        amount: Decimal,
    },

    /// Show the interest a savings account would earn on its balance
    Interest {
        /// Account number
        account_id: u64,
    },

    /// List all accounts
    List,

    /// Interactive session: log in by account number and bank away
    Shell,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountKindArg {
    Savings,
    Current,
}

impl AccountKindArg {
    pub fn to_core_type(&self) -> sitbank_core::AccountKind {
        match self {
            AccountKindArg::Savings => sitbank_core::AccountKind::Savings,
            AccountKindArg::Current => sitbank_core::AccountKind::Current,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = state::load_config(cli.config.as_deref(), cli.interest_rate)?;

    match cli.command {
        Commands::Open {
            kind,
            name,
            deposit,
        } => {
            account::open(&cli.state, config, kind, &name, deposit)?;
        }

        Commands::Show { account_id } => {
            account::show(&cli.state, config, account_id)?;
        }

        Commands::Deposit { account_id, amount } => {
            transaction::deposit(&cli.state, config, account_id, amount)?;
        }

        Commands::Withdraw { account_id, amount } => {
            transaction::withdraw(&cli.state, config, account_id, amount)?;
        }

        Commands::Interest { account_id } => {
            account::interest(&cli.state, config, account_id)?;
        }

        Commands::List => {
            account::list(&cli.state, config)?;
        }

        Commands::Shell => {
            shell::run(&cli.state, config)?;
        }
    }

    Ok(())
}
