//! Command handlers

pub mod account;
pub mod shell;
pub mod transaction;

use rust_decimal::Decimal;
use sitbank_business::{AccountSummary, BankConfig};
use std::io::{self, Write};

/// Account details block, shared by `show` and the shell's `details`
pub fn write_summary<W: Write>(
    out: &mut W,
    config: &BankConfig,
    summary: &AccountSummary,
) -> io::Result<()> {
    writeln!(out, "🏦 Account Details")?;
    writeln!(out, "   Account Number:  {}", summary.id)?;
    writeln!(out, "   Owner:           {}", summary.owner_name)?;
    writeln!(out, "   Account Type:    {}", summary.kind.label())?;
    writeln!(
        out,
        "   Current Balance: {}",
        config.format_amount(summary.balance)
    )?;
    if let Some(rate) = summary.interest_rate {
        let percent = (rate * Decimal::ONE_HUNDRED).normalize();
        writeln!(out, "   Interest Rate:   {}%", percent)?;
    }
    Ok(())
}
