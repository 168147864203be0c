use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::Loan;
use super::errors::LendingError;
use super::ports::LoanRepository;
use super::value_objects::LoanTerms;

/// Loan registry service: creation with term validation, and queries for
/// the two dashboards.
pub struct LendingService {
  loan_repo: Arc<dyn LoanRepository>,
}

impl LendingService {
  pub fn new(loan_repo: Arc<dyn LoanRepository>) -> Self {
    Self { loan_repo }
  }

  /// Files a new application for the owning account.
  ///
  /// # Errors
  /// Returns `LendingError::InvalidTerms` unless amount > 0 and rate >= 0.
  pub async fn apply(
    &self,
    owner_id: Uuid,
    amount: Decimal,
    interest_rate: Decimal,
  ) -> Result<Loan, LendingError> {
    let terms = LoanTerms::new(amount, interest_rate)?;
    let loan = Loan::new(owner_id, terms);

    self.loan_repo.create(loan).await
  }

  pub async fn list_all(&self) -> Result<Vec<Loan>, LendingError> {
    self.loan_repo.list_all().await
  }

  pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Loan>, LendingError> {
    self.loan_repo.list_by_owner(owner_id).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::lending::value_objects::{LoanStatus, ValueObjectError};
  use crate::testing::InMemoryLoanRepository;
  use rust_decimal_macros::dec;

  #[tokio::test]
  async fn test_apply_creates_pending_loan() {
    let repo = Arc::new(InMemoryLoanRepository::new());
    let service = LendingService::new(repo.clone());
    let owner = Uuid::new_v4();

    let loan = service.apply(owner, dec!(1000), dec!(5)).await.unwrap();

    assert_eq!(loan.status, LoanStatus::Pending);
    assert_eq!(service.list_by_owner(owner).await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_apply_rejects_invalid_terms() {
    let repo = Arc::new(InMemoryLoanRepository::new());
    let service = LendingService::new(repo.clone());
    let owner = Uuid::new_v4();

    let err = service.apply(owner, dec!(0), dec!(5)).await.unwrap_err();
    assert!(matches!(
      err,
      LendingError::InvalidTerms(ValueObjectError::NonPositiveAmount)
    ));

    let err = service.apply(owner, dec!(100), dec!(-1)).await.unwrap_err();
    assert!(matches!(
      err,
      LendingError::InvalidTerms(ValueObjectError::NegativeRate)
    ));

    assert_eq!(service.list_all().await.unwrap().len(), 0);
  }

  #[tokio::test]
  async fn test_list_by_owner_scopes_to_one_account() {
    let repo = Arc::new(InMemoryLoanRepository::new());
    let service = LendingService::new(repo.clone());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    service.apply(alice, dec!(1000), dec!(5)).await.unwrap();
    service.apply(bob, dec!(200), dec!(2)).await.unwrap();

    assert_eq!(service.list_by_owner(alice).await.unwrap().len(), 1);
    assert_eq!(service.list_by_owner(bob).await.unwrap().len(), 1);
    assert_eq!(service.list_all().await.unwrap().len(), 2);
  }
}
