//! Bank configuration with serde defaults
//!
//! Every field has a default, so a config file only needs the fields it
//! overrides. The interest rate and rounding rule are configuration rather
//! than hardcoded business rules.

use crate::error::{BusinessError, BusinessResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitbank_core::{Currency, InterestTerms, RoundingRule, DEFAULT_INTEREST_RATE};
use std::path::Path;

/// Largest scale a `Decimal` can represent
const MAX_DECIMALS: u32 = 28;

/// Configuration for the bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Banner title
    #[serde(default = "default_bank_name")]
    pub bank_name: String,

    /// Banner caption
    #[serde(default = "default_branch")]
    pub branch: String,

    /// The single ledger currency (display + minor-unit precision)
    #[serde(default)]
    pub currency: Currency,

    /// Savings interest rate applied per interest calculation
    #[serde(default = "default_interest_rate")]
    pub interest_rate: Decimal,

    /// Rounding rule for interest figures
    #[serde(default)]
    pub rounding: RoundingRule,
}

fn default_bank_name() -> String {
    "SIT Bank".to_string()
}

fn default_branch() -> String {
    "Nagpur Branch".to_string()
}

fn default_interest_rate() -> Decimal {
    DEFAULT_INTEREST_RATE
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bank_name: default_bank_name(),
            branch: default_branch(),
            currency: Currency::default(),
            interest_rate: default_interest_rate(),
            rounding: RoundingRule::default(),
        }
    }
}

impl BankConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &Path) -> BusinessResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the savings interest rate
    pub fn with_interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = rate;
        self
    }

    /// Override the rounding rule
    pub fn with_rounding(mut self, rounding: RoundingRule) -> Self {
        self.rounding = rounding;
        self
    }

    /// Reject values the ledger cannot honor
    pub fn validate(&self) -> BusinessResult<()> {
        if self.interest_rate < Decimal::ZERO {
            return Err(BusinessError::InvalidConfig(format!(
                "interest_rate must not be negative: {}",
                self.interest_rate
            )));
        }
        if self.currency.decimals > MAX_DECIMALS {
            return Err(BusinessError::InvalidConfig(format!(
                "currency.decimals must be at most {}: {}",
                MAX_DECIMALS, self.currency.decimals
            )));
        }
        Ok(())
    }

    /// Interest terms given to newly opened savings accounts
    pub fn interest_terms(&self) -> InterestTerms {
        self.interest_terms_at(self.interest_rate)
    }

    /// Interest terms for a given rate, with this config's precision and rounding
    pub fn interest_terms_at(&self, rate: Decimal) -> InterestTerms {
        InterestTerms::new(rate)
            .with_decimals(self.currency.decimals)
            .with_rounding(self.rounding)
    }

    /// Render an amount in the ledger currency
    pub fn format_amount(&self, amount: Decimal) -> String {
        self.currency.format(amount)
    }
}
