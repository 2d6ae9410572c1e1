//! # Money Module
//!
//! Định nghĩa Currency (một loại tiền duy nhất của sổ cái) và quy tắc làm tròn
//! về đơn vị nhỏ nhất (minor unit), dùng rust_decimal để đảm bảo độ chính xác.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quy tắc làm tròn về minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    /// 0.125 -> 0.13 (midpoint away from zero)
    #[default]
    HalfUp,
    /// 0.125 -> 0.12 (banker's rounding)
    HalfEven,
    /// 0.129 -> 0.12 (truncate toward zero)
    Down,
}

impl RoundingRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingRule::HalfUp => "half_up",
            RoundingRule::HalfEven => "half_even",
            RoundingRule::Down => "down",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "half_up" => Some(RoundingRule::HalfUp),
            "half_even" => Some(RoundingRule::HalfEven),
            "down" => Some(RoundingRule::Down),
            _ => None,
        }
    }

    fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingRule::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingRule::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingRule::Down => RoundingStrategy::ToZero,
        }
    }

    /// Làm tròn `amount` về `decimals` chữ số thập phân
    pub fn apply(&self, amount: Decimal, decimals: u32) -> Decimal {
        amount.round_dp_with_strategy(decimals, self.strategy())
    }
}

impl fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loại tiền của sổ cái.
///
/// Hệ thống chỉ có một loại tiền; struct này chỉ mô tả cách hiển thị và số
/// chữ số thập phân của minor unit.
///
/// # Examples
/// ```
/// use sitbank_core::Currency;
/// use rust_decimal_macros::dec;
///
/// let inr = Currency::inr();
/// assert_eq!(inr.format(dec!(1500)), "₹1500.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Mã tiền tệ ISO 4217
    pub code: String,
    /// Ký hiệu hiển thị
    pub symbol: String,
    /// Số chữ số thập phân của minor unit (INR=2)
    pub decimals: u32,
}

impl Currency {
    /// Tạo Currency mới
    pub fn new(code: &str, symbol: &str, decimals: u32) -> Self {
        Self {
            code: code.to_uppercase(),
            symbol: symbol.to_string(),
            decimals,
        }
    }

    /// Indian Rupee (2 decimals)
    pub fn inr() -> Self {
        Self::new("INR", "₹", 2)
    }

    /// Làm tròn về minor unit theo `rule`
    pub fn round(&self, amount: Decimal, rule: RoundingRule) -> Decimal {
        rule.apply(amount, self.decimals)
    }

    /// Hiển thị số tiền: ký hiệu + số đủ `decimals` chữ số (₹40.00)
    pub fn format(&self, amount: Decimal) -> String {
        let mut shown = self.round(amount, RoundingRule::HalfUp);
        shown.rescale(self.decimals);
        format!("{}{}", self.symbol, shown)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::inr()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounding_rules() {
        assert_eq!(RoundingRule::HalfUp.apply(dec!(0.125), 2), dec!(0.13));
        assert_eq!(RoundingRule::HalfEven.apply(dec!(0.125), 2), dec!(0.12));
        assert_eq!(RoundingRule::Down.apply(dec!(0.129), 2), dec!(0.12));
        assert_eq!(RoundingRule::HalfUp.apply(dec!(40), 2), dec!(40));
    }

    #[test]
    fn test_rounding_rule_str() {
        assert_eq!(RoundingRule::HalfEven.as_str(), "half_even");
        assert_eq!(RoundingRule::from_str("HALF_UP"), Some(RoundingRule::HalfUp));
        assert_eq!(RoundingRule::from_str("ceiling"), None);
    }

    #[test]
    fn test_currency_format_pads_minor_units() {
        let inr = Currency::inr();
        assert_eq!(inr.format(dec!(0)), "₹0.00");
        assert_eq!(inr.format(dec!(1500)), "₹1500.00");
        assert_eq!(inr.format(dec!(40.5)), "₹40.50");
        assert_eq!(inr.format(dec!(12.345)), "₹12.35");
    }

    #[test]
    fn test_zero_decimal_currency() {
        let yen = Currency::new("jpy", "¥", 0);
        assert_eq!(yen.code, "JPY");
        assert_eq!(yen.format(dec!(99.5)), "¥100");
    }

    #[test]
    fn test_rounding_rule_serde() {
        let json = serde_json::to_string(&RoundingRule::HalfEven).unwrap();
        assert_eq!(json, "\"half_even\"");
        let parsed: RoundingRule = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(parsed, RoundingRule::Down);
    }
}
