//! Bank - the account registry
//!
//! Owns the configuration, the account id generator and every account,
//! keyed by account number. All balance changes go through the core
//! transaction operations.

use crate::config::BankConfig;
use crate::error::{BusinessError, BusinessResult};
use rust_decimal::Decimal;
use sitbank_core::{
    Account, AccountIdGenerator, AccountKind, AccountVariant, BankAccount, Withdrawal,
};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Read-only view of an account for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: u64,
    pub owner_name: String,
    pub kind: AccountKind,
    pub balance: Decimal,
    pub interest_rate: Option<Decimal>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            owner_name: account.owner_name().to_string(),
            kind: account.kind(),
            balance: account.get_balance(),
            interest_rate: account.interest_rate(),
        }
    }
}

/// In-memory account registry
#[derive(Debug)]
pub struct Bank {
    config: BankConfig,
    ids: AccountIdGenerator,
    accounts: BTreeMap<u64, Account>,
}

impl Bank {
    /// Create an empty bank; the first account number is 1
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            ids: AccountIdGenerator::new(),
            accounts: BTreeMap::new(),
        }
    }

    /// Rebuild a bank from previously stored accounts.
    ///
    /// The id generator resumes at `max(next_id, max(ids) + 1)` so restored
    /// numbers are never handed out again.
    pub fn restore<I>(config: BankConfig, accounts: I, next_id: u64) -> BusinessResult<Self>
    where
        I: IntoIterator<Item = Account>,
    {
        let mut registry = BTreeMap::new();
        for account in accounts {
            match registry.entry(account.id()) {
                Entry::Vacant(slot) => {
                    slot.insert(account);
                }
                Entry::Occupied(slot) => {
                    return Err(BusinessError::Snapshot(format!(
                        "duplicate account id {}",
                        slot.key()
                    )));
                }
            }
        }

        let resumed = AccountIdGenerator::resume_after(registry.keys().copied());
        let ids = AccountIdGenerator::starting_from(resumed.peek().max(next_id));
        debug!(accounts = registry.len(), next_id = ids.peek(), "Bank restored");

        Ok(Self {
            config,
            ids,
            accounts: registry,
        })
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Account number the next opened account will receive
    pub fn next_account_id(&self) -> u64 {
        self.ids.peek()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts in account-number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Open a new account and register it. Returns the new account number.
    ///
    /// Savings accounts get the configured interest terms.
    pub fn open_account(
        &mut self,
        owner_name: &str,
        kind: AccountKind,
        initial_deposit: Decimal,
    ) -> BusinessResult<u64> {
        let variant = match kind {
            AccountKind::Savings => AccountVariant::Savings(self.config.interest_terms()),
            AccountKind::Current => AccountVariant::Current,
        };

        let account = Account::create(&self.ids, owner_name, initial_deposit, variant)?;
        let id = account.id();
        match self.accounts.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(account);
            }
            Entry::Occupied(_) => return Err(BusinessError::DuplicateAccount(id)),
        }

        info!(
            account_id = id,
            kind = %kind,
            initial_deposit = %initial_deposit,
            "Account opened"
        );
        Ok(id)
    }

    pub fn account(&self, id: u64) -> BusinessResult<&Account> {
        self.accounts
            .get(&id)
            .ok_or(BusinessError::AccountNotFound(id))
    }

    fn account_mut(&mut self, id: u64) -> BusinessResult<&mut Account> {
        self.accounts
            .get_mut(&id)
            .ok_or(BusinessError::AccountNotFound(id))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.accounts.contains_key(&id)
    }

    pub fn summary(&self, id: u64) -> BusinessResult<AccountSummary> {
        self.account(id).map(AccountSummary::from)
    }

    pub fn balance(&self, id: u64) -> BusinessResult<Decimal> {
        Ok(self.account(id)?.get_balance())
    }

    /// Deposit into account `id`. Returns the new balance.
    pub fn deposit(&mut self, id: u64, amount: Decimal) -> BusinessResult<Decimal> {
        let account = self.account_mut(id)?;
        sitbank_core::deposit(account, amount)?;

        let balance = account.get_balance();
        info!(account_id = id, amount = %amount, balance = %balance, "Deposit");
        Ok(balance)
    }

    /// Withdraw from account `id`. Insufficient funds is reported in the
    /// returned [`Withdrawal`], not as an error.
    pub fn withdraw(&mut self, id: u64, amount: Decimal) -> BusinessResult<Withdrawal> {
        let account = self.account_mut(id)?;
        let outcome = sitbank_core::withdraw(account, amount)?;

        match outcome {
            Withdrawal::Completed { amount, balance } => {
                info!(account_id = id, amount = %amount, balance = %balance, "Withdrawal");
            }
            Withdrawal::InsufficientFunds {
                requested,
                available,
            } => {
                info!(
                    account_id = id,
                    requested = %requested,
                    available = %available,
                    "Withdrawal refused: insufficient funds"
                );
            }
        }
        Ok(outcome)
    }

    /// Interest on a savings account's current balance. Display only.
    pub fn interest(&self, id: u64) -> BusinessResult<Decimal> {
        self.account(id)?
            .as_savings()
            .map(|savings| savings.calculate_interest())
            .ok_or(BusinessError::InterestNotSupported(id))
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}
