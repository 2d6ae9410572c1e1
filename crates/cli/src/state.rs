//! Config and snapshot loading shared by all commands

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sitbank_business::{snapshot, Bank, BankConfig};
use std::path::Path;

/// Build the bank config: file (or defaults), then CLI overrides
pub fn load_config(path: Option<&Path>, interest_rate: Option<Decimal>) -> Result<BankConfig> {
    let mut config = match path {
        Some(path) => BankConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BankConfig::default(),
    };

    if let Some(rate) = interest_rate {
        config = config.with_interest_rate(rate);
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

/// Load the bank from the snapshot file (empty bank if it does not exist)
pub fn open_bank(state: &Path, config: BankConfig) -> Result<Bank> {
    snapshot::load(state, config)
        .with_context(|| format!("Failed to load state from {}", state.display()))
}

/// Persist the bank to the snapshot file
pub fn save_bank(state: &Path, bank: &Bank) -> Result<()> {
    snapshot::save(state, bank)
        .with_context(|| format!("Failed to save state to {}", state.display()))
}
