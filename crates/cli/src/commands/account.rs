//! Account commands: open, show, list, interest

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sitbank_business::{BankConfig, BusinessError};
use sitbank_core::BankAccount;
use std::path::Path;

use super::write_summary;
use crate::state;
use crate::AccountKindArg;

/// Open a new account and print its number
pub fn open(
    state_path: &Path,
    config: BankConfig,
    kind: AccountKindArg,
    name: &str,
    deposit: Decimal,
) -> Result<()> {
    let mut bank = state::open_bank(state_path, config)?;
    let kind = kind.to_core_type();

    let id = bank
        .open_account(name, kind, deposit)
        .context("Failed to open account")?;
    state::save_bank(state_path, &bank)?;

    println!("✅ Account created successfully! Your account number is {}", id);
    println!("   Type:    {}", kind.label());
    println!("   Owner:   {}", name.trim());
    println!("   Balance: {}", bank.config().format_amount(deposit));
    Ok(())
}

/// Show account details
pub fn show(state_path: &Path, config: BankConfig, account_id: u64) -> Result<()> {
    let bank = state::open_bank(state_path, config)?;
    let summary = bank.summary(account_id)?;

    let mut stdout = std::io::stdout().lock();
    write_summary(&mut stdout, bank.config(), &summary)?;
    Ok(())
}

/// List all accounts
pub fn list(state_path: &Path, config: BankConfig) -> Result<()> {
    let bank = state::open_bank(state_path, config)?;

    if bank.is_empty() {
        println!("No accounts found.");
        return Ok(());
    }

    println!("{:<8} {:<20} {:<10} {:>16}", "ACCOUNT", "OWNER", "TYPE", "BALANCE");
    println!("{}", "-".repeat(57));
    for account in bank.accounts() {
        println!(
            "{:<8} {:<20} {:<10} {:>16}",
            account.id(),
            account.owner_name(),
            account.kind().label(),
            bank.config().format_amount(account.get_balance())
        );
    }
    Ok(())
}

/// Show interest on a savings account
pub fn interest(state_path: &Path, config: BankConfig, account_id: u64) -> Result<()> {
    let bank = state::open_bank(state_path, config)?;

    match bank.interest(account_id) {
        Ok(interest) => {
            println!("📈 Interest earned: {}", bank.config().format_amount(interest));
            Ok(())
        }
        Err(BusinessError::InterestNotSupported(id)) => {
            println!("ℹ️  Account {} is a current account; interest applies to savings accounts only.", id);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
