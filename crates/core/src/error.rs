//! # Error Module
//!
//! Định nghĩa các domain errors cho SIT Bank sử dụng thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// Thiếu số dư khi rút tiền KHÔNG phải là lỗi ở đây: đó là kết quả nghiệp vụ
/// bình thường, xem [`crate::transaction::Withdrawal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Tên chủ tài khoản rỗng hoặc số dư ban đầu âm
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Số tiền nạp/rút âm
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Đã cấp hết số tài khoản
    #[error("Account numbers exhausted")]
    IdsExhausted,
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Kiểm tra có phải lỗi input khi tạo account không
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }

    /// Kiểm tra có phải lỗi số tiền giao dịch không
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, CoreError::InvalidAmount(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidInput("owner name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: owner name must not be empty"
        );

        let err = CoreError::InvalidAmount("-5".to_string());
        assert_eq!(err.to_string(), "Invalid amount: -5");
    }

    #[test]
    fn test_error_checks() {
        assert!(CoreError::InvalidInput("x".to_string()).is_invalid_input());
        assert!(!CoreError::InvalidInput("x".to_string()).is_invalid_amount());
        assert!(CoreError::InvalidAmount("x".to_string()).is_invalid_amount());
        assert!(!CoreError::IdsExhausted.is_invalid_input());
        assert_eq!(CoreError::IdsExhausted.to_string(), "Account numbers exhausted");
    }
}
