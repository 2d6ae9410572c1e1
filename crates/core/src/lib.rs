//! # SIT Bank Core
//!
//! Core domain types: AccountIdGenerator, Account (Savings/Current),
//! Transaction operations (deposit, withdraw), Currency và rounding.
//!
//! Crate này thuần đồng bộ, không I/O và không log.

pub mod account;
pub mod error;
pub mod id;
pub mod money;
pub mod transaction;

pub use account::{
    Account, AccountInfo, AccountKind, AccountVariant, BankAccount, CurrentAccount,
    InterestTerms, SavingsAccount, DEFAULT_INTEREST_RATE, DEFAULT_MINOR_UNITS,
};
pub use error::{CoreError, CoreResult};
pub use id::AccountIdGenerator;
pub use money::{Currency, RoundingRule};
pub use transaction::{deposit, withdraw, Withdrawal};
