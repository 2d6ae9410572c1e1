//! JSON snapshot of the bank
//!
//! Stores `{ next_account_id, accounts: [...] }` so a CLI invocation can pick
//! up where the previous one left off. Records are validated on the way back
//! in; the id generator never goes below `max(ids) + 1`.

use crate::bank::Bank;
use crate::config::BankConfig;
use crate::error::{BusinessError, BusinessResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitbank_core::{Account, AccountKind, BankAccount, CurrentAccount, SavingsAccount};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// One stored account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: u64,
    pub owner_name: String,
    pub balance: Decimal,
    pub kind: AccountKind,
    /// Savings only; falls back to the configured rate when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    pub opened_at: DateTime<Utc>,
}

impl AccountRecord {
    fn into_account(self, config: &BankConfig) -> BusinessResult<Account> {
        let id = self.id;
        let restored = match self.kind {
            AccountKind::Savings => {
                let rate = self.interest_rate.unwrap_or(config.interest_rate);
                SavingsAccount::restore(
                    id,
                    &self.owner_name,
                    self.balance,
                    self.opened_at,
                    config.interest_terms_at(rate),
                )
                .map(Account::from)
            }
            AccountKind::Current => {
                CurrentAccount::restore(id, &self.owner_name, self.balance, self.opened_at)
                    .map(Account::from)
            }
        };
        restored.map_err(|err| BusinessError::Snapshot(format!("account {}: {}", id, err)))
    }
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            owner_name: account.owner_name().to_string(),
            balance: account.get_balance(),
            kind: account.kind(),
            interest_rate: account.interest_rate(),
            opened_at: account.info().opened_at(),
        }
    }
}

/// Serializable state of a whole bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub next_account_id: u64,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
}

impl Snapshot {
    pub fn capture(bank: &Bank) -> Self {
        Self {
            next_account_id: bank.next_account_id(),
            accounts: bank.accounts().map(AccountRecord::from).collect(),
        }
    }

    pub fn into_bank(self, config: BankConfig) -> BusinessResult<Bank> {
        let accounts = self
            .accounts
            .into_iter()
            .map(|record| record.into_account(&config))
            .collect::<BusinessResult<Vec<_>>>()?;
        Bank::restore(config, accounts, self.next_account_id)
    }

    pub fn to_json(&self) -> BusinessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> BusinessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load a bank from `path`. A missing file yields an empty bank.
pub fn load(path: &Path, config: BankConfig) -> BusinessResult<Bank> {
    if !path.exists() {
        debug!(path = %path.display(), "No snapshot found, starting empty");
        return Ok(Bank::new(config));
    }

    let content = fs::read_to_string(path)?;
    let bank = Snapshot::from_json(&content)?.into_bank(config)?;
    info!(path = %path.display(), accounts = bank.len(), "Snapshot loaded");
    Ok(bank)
}

/// Save `bank` to `path`, creating parent directories as needed.
///
/// Writes a sibling temp file first and renames it over `path`.
pub fn save(path: &Path, bank: &Bank) -> BusinessResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = Snapshot::capture(bank).to_json()?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!(path = %path.display(), accounts = bank.len(), "Snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_bank() -> Bank {
        let mut bank = Bank::default();
        bank.open_account("Asha", AccountKind::Savings, dec!(1000)).unwrap();
        bank.open_account("Raj", AccountKind::Current, dec!(0)).unwrap();
        bank.deposit(1, dec!(500)).unwrap();
        bank
    }

    #[test]
    fn test_capture() {
        let snapshot = Snapshot::capture(&sample_bank());

        assert_eq!(snapshot.next_account_id, 3);
        assert_eq!(snapshot.accounts.len(), 2);
        assert_eq!(snapshot.accounts[0].balance, dec!(1500));
        assert_eq!(snapshot.accounts[0].interest_rate, Some(dec!(0.04)));
        assert_eq!(snapshot.accounts[1].interest_rate, None);
    }

    #[test]
    fn test_current_account_omits_interest_rate() {
        let json = Snapshot::capture(&sample_bank()).to_json().unwrap();
        assert_eq!(json.matches("interest_rate").count(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("sitbank.json");

        save(&path, &sample_bank()).unwrap();
        let mut bank = load(&path, BankConfig::default()).unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.balance(1).unwrap(), dec!(1500));
        assert_eq!(bank.interest(1).unwrap(), dec!(60.00));
        assert_eq!(bank.account(2).unwrap().owner_name(), "Raj");

        // Numbering continues after the restored accounts
        let id = bank.open_account("Priya", AccountKind::Savings, dec!(0)).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let bank = load(&dir.path().join("nope.json"), BankConfig::default()).unwrap();

        assert!(bank.is_empty());
        assert_eq!(bank.next_account_id(), 1);
    }

    #[test]
    fn test_stale_counter_is_raised() {
        let json = r#"{
            "next_account_id": 1,
            "accounts": [
                { "id": 7, "owner_name": "Asha", "balance": "10", "kind": "current",
                  "opened_at": "2026-01-01T00:00:00Z" }
            ]
        }"#;
        let bank = Snapshot::from_json(json)
            .unwrap()
            .into_bank(BankConfig::default())
            .unwrap();

        assert_eq!(bank.next_account_id(), 8);
    }

    #[test]
    fn test_savings_without_rate_uses_config() {
        let json = r#"{
            "next_account_id": 2,
            "accounts": [
                { "id": 1, "owner_name": "Asha", "balance": "1000", "kind": "savings",
                  "opened_at": "2026-01-01T00:00:00Z" }
            ]
        }"#;
        let config = BankConfig::default().with_interest_rate(dec!(0.05));
        let bank = Snapshot::from_json(json).unwrap().into_bank(config).unwrap();

        assert_eq!(bank.interest(1).unwrap(), dec!(50.00));
    }

    #[test]
    fn test_invalid_records_rejected() {
        let negative = r#"{
            "next_account_id": 2,
            "accounts": [
                { "id": 1, "owner_name": "Asha", "balance": "-5", "kind": "current",
                  "opened_at": "2026-01-01T00:00:00Z" }
            ]
        }"#;
        let err = Snapshot::from_json(negative)
            .unwrap()
            .into_bank(BankConfig::default())
            .unwrap_err();
        assert!(matches!(err, BusinessError::Snapshot(_)));

        let empty_name = negative.replace("\"Asha\"", "\"\"").replace("-5", "5");
        assert!(Snapshot::from_json(&empty_name)
            .unwrap()
            .into_bank(BankConfig::default())
            .is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Snapshot::from_json("{ not json"),
            Err(BusinessError::Json(_))
        ));
    }
}
