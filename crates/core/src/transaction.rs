//! # Transaction Module
//!
//! Các thao tác làm thay đổi số dư: deposit, withdraw.
//! Mỗi thao tác kiểm tra trước, rồi mới ghi (check-then-commit), nên lỗi không
//! bao giờ để lại số dư ở trạng thái dở dang.

use crate::account::sealed::Sealed;
use crate::account::BankAccount;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use std::fmt;

/// Kết quả của một lần rút tiền.
///
/// Thiếu số dư là kết quả nghiệp vụ bình thường mà caller phải rẽ nhánh,
/// không phải lỗi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Withdrawal {
    /// Đã rút `amount`, số dư còn lại `balance`
    Completed { amount: Decimal, balance: Decimal },
    /// Không đủ số dư, số dư giữ nguyên
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}

impl Withdrawal {
    /// Kiểm tra rút tiền có thành công không
    pub fn is_success(&self) -> bool {
        matches!(self, Withdrawal::Completed { .. })
    }

    /// Số dư sau thao tác (không đổi nếu thất bại)
    pub fn balance(&self) -> Decimal {
        match self {
            Withdrawal::Completed { balance, .. } => *balance,
            Withdrawal::InsufficientFunds { available, .. } => *available,
        }
    }

    /// Số tiền còn thiếu (0 nếu thành công)
    pub fn shortfall(&self) -> Decimal {
        match self {
            Withdrawal::Completed { .. } => Decimal::ZERO,
            Withdrawal::InsufficientFunds {
                requested,
                available,
            } => *requested - *available,
        }
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Withdrawal::Completed { amount, balance } => {
                write!(f, "withdrew {} (balance: {})", amount, balance)
            }
            Withdrawal::InsufficientFunds {
                requested,
                available,
            } => write!(
                f,
                "insufficient funds: requested {}, available {}",
                requested, available
            ),
        }
    }
}

fn ensure_non_negative(operation: &str, amount: Decimal) -> CoreResult<()> {
    if amount < Decimal::ZERO {
        return Err(CoreError::InvalidAmount(format!(
            "{} amount must not be negative: {}",
            operation, amount
        )));
    }
    Ok(())
}

/// Nạp `amount` vào tài khoản.
///
/// # Errors
/// `InvalidAmount` nếu `amount < 0` hoặc số dư mới vượt quá phạm vi Decimal;
/// số dư không đổi.
pub fn deposit<A>(account: &mut A, amount: Decimal) -> CoreResult<()>
where
    A: BankAccount + ?Sized,
{
    ensure_non_negative("Deposit", amount)?;

    let balance = account.get_balance().checked_add(amount).ok_or_else(|| {
        CoreError::InvalidAmount(format!("Deposit of {} overflows the balance", amount))
    })?;
    account.info_mut().set_balance(balance);
    Ok(())
}

/// Rút `amount` khỏi tài khoản.
///
/// # Returns
/// - `Ok(Withdrawal::Completed)` nếu đủ số dư
/// - `Ok(Withdrawal::InsufficientFunds)` nếu `amount > balance`; số dư không đổi
///
/// # Errors
/// `InvalidAmount` nếu `amount < 0`.
pub fn withdraw<A>(account: &mut A, amount: Decimal) -> CoreResult<Withdrawal>
where
    A: BankAccount + ?Sized,
{
    ensure_non_negative("Withdrawal", amount)?;

    let available = account.get_balance();
    if amount > available {
        return Ok(Withdrawal::InsufficientFunds {
            requested: amount,
            available,
        });
    }

    // 0 <= amount <= available nên phép trừ không tràn
    let balance = available - amount;
    account.info_mut().set_balance(balance);
    Ok(Withdrawal::Completed { amount, balance })
}
