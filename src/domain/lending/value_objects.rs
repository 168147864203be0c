use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
  #[error("Loan amount must be greater than zero")]
  NonPositiveAmount,

  #[error("Interest rate cannot be negative")]
  NegativeRate,

  #[error("Unknown loan status: {0}")]
  UnknownStatus(String),
}

// Loan status. Applications come in Pending; the review transitions are
// not wired yet, so Approved/Rejected exist only as data states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
  Pending,
  Approved,
  Rejected,
}

impl LoanStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      LoanStatus::Pending => "pending",
      LoanStatus::Approved => "approved",
      LoanStatus::Rejected => "rejected",
    }
  }
}

impl FromStr for LoanStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(LoanStatus::Pending),
      "approved" => Ok(LoanStatus::Approved),
      "rejected" => Ok(LoanStatus::Rejected),
      other => Err(ValueObjectError::UnknownStatus(other.to_string())),
    }
  }
}

impl fmt::Display for LoanStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// LoanTerms - amount and interest rate, validated together at the edge of
// the registry. Decimals are always finite, so the checks reduce to sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
  amount: Decimal,
  interest_rate: Decimal,
}

impl LoanTerms {
  pub fn new(amount: Decimal, interest_rate: Decimal) -> Result<Self, ValueObjectError> {
    if amount <= Decimal::ZERO {
      return Err(ValueObjectError::NonPositiveAmount);
    }
    if interest_rate < Decimal::ZERO {
      return Err(ValueObjectError::NegativeRate);
    }

    Ok(Self {
      amount,
      interest_rate,
    })
  }

  pub fn amount(&self) -> Decimal {
    self.amount
  }

  pub fn interest_rate(&self) -> Decimal {
    self.interest_rate
  }
}
