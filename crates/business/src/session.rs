//! Login session - log in by account number, then act on that account
//!
//! `LoggedOut -> login(id) -> LoggedIn(id) -> logout() -> LoggedOut`.
//! A session only remembers the account number; the bank stays the owner
//! of every account.

use crate::bank::{AccountSummary, Bank};
use crate::error::{BusinessError, BusinessResult};
use rust_decimal::Decimal;
use sitbank_core::{BankAccount, Withdrawal};
use tracing::info;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(u64),
}

/// A single user's session against a bank
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Account number of the logged-in user, if any
    pub fn current(&self) -> Option<u64> {
        match self.state {
            SessionState::LoggedIn(id) => Some(id),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    fn require_login(&self) -> BusinessResult<u64> {
        self.current().ok_or(BusinessError::NotLoggedIn)
    }

    /// Log in by account number. Returns the owner's name for the welcome
    /// message. An unknown number leaves the session unchanged.
    pub fn login(&mut self, bank: &Bank, id: u64) -> BusinessResult<String> {
        let owner = bank.account(id)?.owner_name().to_string();
        self.state = SessionState::LoggedIn(id);
        info!(account_id = id, "Logged in");
        Ok(owner)
    }

    /// Log out. Returns `false` if nobody was logged in.
    pub fn logout(&mut self) -> bool {
        match self.state {
            SessionState::LoggedIn(id) => {
                info!(account_id = id, "Logged out");
                self.state = SessionState::LoggedOut;
                true
            }
            SessionState::LoggedOut => false,
        }
    }

    pub fn details(&self, bank: &Bank) -> BusinessResult<AccountSummary> {
        bank.summary(self.require_login()?)
    }

    pub fn deposit(&self, bank: &mut Bank, amount: Decimal) -> BusinessResult<Decimal> {
        bank.deposit(self.require_login()?, amount)
    }

    pub fn withdraw(&self, bank: &mut Bank, amount: Decimal) -> BusinessResult<Withdrawal> {
        bank.withdraw(self.require_login()?, amount)
    }

    pub fn interest(&self, bank: &Bank) -> BusinessResult<Decimal> {
        bank.interest(self.require_login()?)
    }
}
