//! Business layer errors

use sitbank_core::CoreError;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Error)]
pub enum BusinessError {
    // === Lookup errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(u64),

    #[error("No account is logged in")]
    NotLoggedIn,

    #[error("Account number already in use: {0}")]
    DuplicateAccount(u64),

    // === Capability errors ===
    #[error("Account {0} is a current account and does not earn interest")]
    InterestNotSupported(u64),

    // === Configuration / storage errors ===
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid snapshot: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Wrapped errors ===
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

impl BusinessError {
    /// Check if the error means the caller used an unknown account number
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }

    /// Check if the error came from validating user input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Core(CoreError::InvalidInput(_)) | Self::Core(CoreError::InvalidAmount(_))
        )
    }
}
