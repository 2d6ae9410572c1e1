//! Transaction commands: deposit, withdraw

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sitbank_business::BankConfig;
use sitbank_core::Withdrawal;
use std::io::{self, Write};
use std::path::Path;

use crate::state;

/// Deposit funds to an account
pub fn deposit(state_path: &Path, config: BankConfig, account_id: u64, amount: Decimal) -> Result<()> {
    let mut bank = state::open_bank(state_path, config)?;

    let balance = bank
        .deposit(account_id, amount)
        .with_context(|| format!("Failed to deposit into account {}", account_id))?;
    state::save_bank(state_path, &bank)?;

    let config = bank.config();
    println!("✅ Deposited {}", config.format_amount(amount));
    println!("   Balance: {}", config.format_amount(balance));
    Ok(())
}

/// Withdraw funds from an account
pub fn withdraw(state_path: &Path, config: BankConfig, account_id: u64, amount: Decimal) -> Result<()> {
    let stdout = io::stdout();
    withdraw_to(&mut stdout.lock(), state_path, config, account_id, amount)
}

/// Insufficient funds is an ordinary outcome: report it and leave the state file alone.
fn withdraw_to<W: Write>(
    out: &mut W,
    state_path: &Path,
    config: BankConfig,
    account_id: u64,
    amount: Decimal,
) -> Result<()> {
    let mut bank = state::open_bank(state_path, config)?;

    let outcome = bank
        .withdraw(account_id, amount)
        .with_context(|| format!("Failed to withdraw from account {}", account_id))?;

    let config = bank.config();
    match outcome {
        Withdrawal::Completed { amount, balance } => {
            state::save_bank(state_path, &bank)?;
            writeln!(out, "✅ Withdrawn {}", config.format_amount(amount))?;
            writeln!(out, "   Balance: {}", config.format_amount(balance))?;
        }
        Withdrawal::InsufficientFunds {
            requested,
            available,
        } => {
            writeln!(out, "❌ Insufficient balance.")?;
            writeln!(
                out,
                "   Requested {}, available {}",
                config.format_amount(requested),
                config.format_amount(available)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use sitbank_core::AccountKind;

    fn state_with_account(dir: &Path, balance: Decimal) -> std::path::PathBuf {
        let state = dir.join("sitbank.json");
        let mut bank = state::open_bank(&state, BankConfig::default()).unwrap();
        bank.open_account("Asha", AccountKind::Savings, balance).unwrap();
        state::save_bank(&state, &bank).unwrap();
        state
    }

    fn run_withdraw(state: &Path, amount: Decimal) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = withdraw_to(&mut out, state, BankConfig::default(), 1, amount);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_insufficient_funds_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with_account(dir.path(), dec!(100));

        let (result, out) = run_withdraw(&state, dec!(500));
        assert!(result.is_ok());
        assert!(out.contains("Insufficient balance."));

        let bank = state::open_bank(&state, BankConfig::default()).unwrap();
        assert_eq!(bank.balance(1).unwrap(), dec!(100));
    }

    #[test]
    fn test_completed_withdrawal_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with_account(dir.path(), dec!(100));

        let (result, out) = run_withdraw(&state, dec!(40));
        assert!(result.is_ok());
        assert!(out.contains("Withdrawn ₹40.00"));
        assert!(out.contains("Balance: ₹60.00"));

        let bank = state::open_bank(&state, BankConfig::default()).unwrap();
        assert_eq!(bank.balance(1).unwrap(), dec!(60));
    }

    #[test]
    fn test_unknown_account_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with_account(dir.path(), dec!(100));

        let mut out = Vec::new();
        assert!(withdraw_to(&mut out, &state, BankConfig::default(), 9, dec!(1)).is_err());
    }
}
