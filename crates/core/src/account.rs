//! # Account Module
//!
//! Định nghĩa Account và hai biến thể:
//! - SavingsAccount: có khả năng tính lãi (calculate_interest)
//! - CurrentAccount: không có khả năng tính lãi
//!
//! Số dư chỉ thay đổi qua các hàm trong `transaction` module. Primitive
//! `set_balance` là `pub(crate)` và accessor mutable nằm trong sealed trait,
//! nên code ngoài crate không thể sửa số dư trực tiếp.

use crate::error::{CoreError, CoreResult};
use crate::id::AccountIdGenerator;
use crate::money::RoundingRule;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use self::sealed::Sealed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lãi suất mặc định của SavingsAccount (4% mỗi lần tính)
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2); // 0.04

/// Số chữ số thập phân mặc định của minor unit
pub const DEFAULT_MINOR_UNITS: u32 = 2;

/// Loại tài khoản
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Tài khoản tiết kiệm - có lãi
    Savings,
    /// Tài khoản vãng lai - không có lãi
    Current,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
        }
    }

    /// Nhãn hiển thị cho UI
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current => "Current",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "savings" => Some(AccountKind::Savings),
            "current" => Some(AccountKind::Current),
            _ => None,
        }
    }

    /// Kiểm tra loại tài khoản có tính lãi không
    pub fn earns_interest(&self) -> bool {
        matches!(self, AccountKind::Savings)
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Điều khoản lãi của SavingsAccount: lãi suất và cách làm tròn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestTerms {
    /// Lãi suất mỗi lần tính (0.04 = 4%)
    pub rate: Decimal,
    /// Số chữ số thập phân của kết quả
    pub decimals: u32,
    /// Quy tắc làm tròn
    pub rounding: RoundingRule,
}

impl InterestTerms {
    pub fn new(rate: Decimal) -> Self {
        Self {
            rate,
            decimals: DEFAULT_MINOR_UNITS,
            rounding: RoundingRule::default(),
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingRule) -> Self {
        self.rounding = rounding;
        self
    }

    /// Lãi trên `balance`, đã làm tròn về minor unit.
    ///
    /// Tích vượt quá phạm vi Decimal thì bão hoà ở `Decimal::MAX`.
    pub fn interest_on(&self, balance: Decimal) -> Decimal {
        let interest = balance.checked_mul(self.rate).unwrap_or(Decimal::MAX);
        self.rounding.apply(interest, self.decimals)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.rate < Decimal::ZERO {
            return Err(CoreError::InvalidInput(format!(
                "interest rate must not be negative: {}",
                self.rate
            )));
        }
        Ok(())
    }
}

impl Default for InterestTerms {
    fn default() -> Self {
        Self::new(DEFAULT_INTEREST_RATE)
    }
}

/// Phần chung của mọi loại tài khoản: id, chủ tài khoản, số dư.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    id: u64,
    owner_name: String,
    balance: Decimal,
    opened_at: DateTime<Utc>,
}

impl AccountInfo {
    /// Validate input rồi mới cấp id, nên lỗi không làm tốn id.
    fn open(ids: &AccountIdGenerator, owner_name: &str, initial_balance: Decimal) -> CoreResult<Self> {
        let owner_name = validate_owner(owner_name)?;
        validate_balance(initial_balance)?;

        Ok(Self {
            id: ids.next()?,
            owner_name,
            balance: initial_balance,
            opened_at: Utc::now(),
        })
    }

    fn restore(
        id: u64,
        owner_name: &str,
        balance: Decimal,
        opened_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if id == 0 {
            return Err(CoreError::InvalidInput("account id must be >= 1".to_string()));
        }
        Ok(Self {
            id,
            owner_name: validate_owner(owner_name)?,
            balance: validate_balance(balance)?,
            opened_at,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Ghi số dư mới mà caller đã tính và kiểm tra (không âm, không tràn)
    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        debug_assert!(balance >= Decimal::ZERO);
        self.balance = balance;
    }
}

fn validate_owner(owner_name: &str) -> CoreResult<String> {
    let owner_name = owner_name.trim();
    if owner_name.is_empty() {
        return Err(CoreError::InvalidInput(
            "owner name must not be empty".to_string(),
        ));
    }
    Ok(owner_name.to_string())
}

fn validate_balance(balance: Decimal) -> CoreResult<Decimal> {
    if balance < Decimal::ZERO {
        return Err(CoreError::InvalidInput(format!(
            "initial balance must not be negative: {}",
            balance
        )));
    }
    Ok(balance)
}

pub(crate) mod sealed {
    use super::AccountInfo;

    pub trait Sealed {
        fn info_mut(&mut self) -> &mut AccountInfo;
    }
}

/// Khả năng chung của mọi tài khoản.
///
/// Trait được seal: chỉ các loại tài khoản trong crate này implement được.
pub trait BankAccount: sealed::Sealed {
    fn info(&self) -> &AccountInfo;

    fn kind(&self) -> AccountKind;

    fn id(&self) -> u64 {
        self.info().id()
    }

    fn owner_name(&self) -> &str {
        self.info().owner_name()
    }

    /// Số dư hiện tại
    fn get_balance(&self) -> Decimal {
        self.info().balance()
    }
}

/// Tài khoản tiết kiệm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    info: AccountInfo,
    terms: InterestTerms,
}

impl SavingsAccount {
    /// Mở tài khoản tiết kiệm mới, cấp id từ `ids`
    pub fn open(
        ids: &AccountIdGenerator,
        owner_name: &str,
        initial_balance: Decimal,
        terms: InterestTerms,
    ) -> CoreResult<Self> {
        terms.validate()?;
        Ok(Self {
            info: AccountInfo::open(ids, owner_name, initial_balance)?,
            terms,
        })
    }

    /// Dựng lại tài khoản đã lưu (snapshot) với id có sẵn
    pub fn restore(
        id: u64,
        owner_name: &str,
        balance: Decimal,
        opened_at: DateTime<Utc>,
        terms: InterestTerms,
    ) -> CoreResult<Self> {
        terms.validate()?;
        Ok(Self {
            info: AccountInfo::restore(id, owner_name, balance, opened_at)?,
            terms,
        })
    }

    pub fn interest_rate(&self) -> Decimal {
        self.terms.rate
    }

    pub fn terms(&self) -> &InterestTerms {
        &self.terms
    }

    /// Lãi = balance * rate, làm tròn về minor unit. Không thay đổi số dư.
    pub fn calculate_interest(&self) -> Decimal {
        self.terms.interest_on(self.info.balance())
    }
}

impl sealed::Sealed for SavingsAccount {
    fn info_mut(&mut self) -> &mut AccountInfo {
        &mut self.info
    }
}

impl BankAccount for SavingsAccount {
    fn info(&self) -> &AccountInfo {
        &self.info
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }
}

/// Tài khoản vãng lai
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAccount {
    info: AccountInfo,
}

impl CurrentAccount {
    /// Mở tài khoản vãng lai mới, cấp id từ `ids`
    pub fn open(
        ids: &AccountIdGenerator,
        owner_name: &str,
        initial_balance: Decimal,
    ) -> CoreResult<Self> {
        Ok(Self {
            info: AccountInfo::open(ids, owner_name, initial_balance)?,
        })
    }

    /// Dựng lại tài khoản đã lưu (snapshot) với id có sẵn
    pub fn restore(
        id: u64,
        owner_name: &str,
        balance: Decimal,
        opened_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        Ok(Self {
            info: AccountInfo::restore(id, owner_name, balance, opened_at)?,
        })
    }
}

impl sealed::Sealed for CurrentAccount {
    fn info_mut(&mut self) -> &mut AccountInfo {
        &mut self.info
    }
}

impl BankAccount for CurrentAccount {
    fn info(&self) -> &AccountInfo {
        &self.info
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Current
    }
}

/// Biến thể cần tạo, kèm dữ liệu riêng của biến thể
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountVariant {
    Savings(InterestTerms),
    Current,
}

impl AccountVariant {
    pub fn kind(&self) -> AccountKind {
        match self {
            AccountVariant::Savings(_) => AccountKind::Savings,
            AccountVariant::Current => AccountKind::Current,
        }
    }
}

/// Tài khoản đã xóa kiểu (type-erased), dùng để lưu trong registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Savings(SavingsAccount),
    Current(CurrentAccount),
}

impl Account {
    /// Tạo account theo biến thể. Lỗi `InvalidInput` nếu tên rỗng hoặc số dư âm.
    pub fn create(
        ids: &AccountIdGenerator,
        owner_name: &str,
        initial_balance: Decimal,
        variant: AccountVariant,
    ) -> CoreResult<Self> {
        match variant {
            AccountVariant::Savings(terms) => {
                SavingsAccount::open(ids, owner_name, initial_balance, terms).map(Account::Savings)
            }
            AccountVariant::Current => {
                CurrentAccount::open(ids, owner_name, initial_balance).map(Account::Current)
            }
        }
    }

    /// Lấy SavingsAccount nếu đây là tài khoản tiết kiệm
    pub fn as_savings(&self) -> Option<&SavingsAccount> {
        match self {
            Account::Savings(savings) => Some(savings),
            Account::Current(_) => None,
        }
    }

    pub fn as_current(&self) -> Option<&CurrentAccount> {
        match self {
            Account::Current(current) => Some(current),
            Account::Savings(_) => None,
        }
    }

    /// Lãi suất (chỉ có với tài khoản tiết kiệm)
    pub fn interest_rate(&self) -> Option<Decimal> {
        self.as_savings().map(SavingsAccount::interest_rate)
    }
}

impl sealed::Sealed for Account {
    fn info_mut(&mut self) -> &mut AccountInfo {
        match self {
            Account::Savings(savings) => savings.info_mut(),
            Account::Current(current) => current.info_mut(),
        }
    }
}

impl BankAccount for Account {
    fn info(&self) -> &AccountInfo {
        match self {
            Account::Savings(savings) => savings.info(),
            Account::Current(current) => current.info(),
        }
    }

    fn kind(&self) -> AccountKind {
        match self {
            Account::Savings(_) => AccountKind::Savings,
            Account::Current(_) => AccountKind::Current,
        }
    }
}

impl From<SavingsAccount> for Account {
    fn from(account: SavingsAccount) -> Self {
        Account::Savings(account)
    }
}

impl From<CurrentAccount> for Account {
    fn from(account: CurrentAccount) -> Self {
        Account::Current(account)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} account #{} (owner: {}, balance: {})",
            self.kind().label(),
            self.id(),
            self.owner_name(),
            self.get_balance()
        )
    }
}
