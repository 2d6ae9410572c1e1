//! # SIT Bank Business
//!
//! Business logic layer - account registry, login session, configuration,
//! and JSON snapshot persistence.

pub mod bank;
pub mod config;
pub mod error;
pub mod session;
pub mod snapshot;

pub use bank::{AccountSummary, Bank};
pub use config::BankConfig;
pub use error::{BusinessError, BusinessResult};
pub use session::{Session, SessionState};
pub use snapshot::{AccountRecord, Snapshot};
