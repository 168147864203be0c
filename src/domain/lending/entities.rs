use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{LoanStatus, LoanTerms};

/// Loan entity: one application filed by exactly one borrower account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
  pub id: Uuid,
  /// The borrower account that filed the application
  pub owner_id: Uuid,
  pub amount: Decimal,
  pub interest_rate: Decimal,
  pub status: LoanStatus,
  pub created_at: DateTime<Utc>,
}

impl Loan {
  /// Creates a new pending application with validated terms
  pub fn new(owner_id: Uuid, terms: LoanTerms) -> Self {
    Self {
      id: Uuid::new_v4(),
      owner_id,
      amount: terms.amount(),
      interest_rate: terms.interest_rate(),
      status: LoanStatus::Pending,
      created_at: Utc::now(),
    }
  }

  /// Reconstructs a loan from stored fields
  pub fn from_db(
    id: Uuid,
    owner_id: Uuid,
    amount: Decimal,
    interest_rate: Decimal,
    status: LoanStatus,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      owner_id,
      amount,
      interest_rate,
      status,
      created_at,
    }
  }
}
