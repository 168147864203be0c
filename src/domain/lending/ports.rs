use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Loan;
use super::errors::LendingError;

/// Repository trait for loan persistence operations
#[async_trait]
pub trait LoanRepository: Send + Sync {
  /// Creates a new loan in the repository
  async fn create(&self, loan: Loan) -> Result<Loan, LendingError>;

  /// All loans, newest first
  async fn list_all(&self) -> Result<Vec<Loan>, LendingError>;

  /// All loans filed by one account, newest first
  async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Loan>, LendingError>;

  /// Deletes every loan owned by an account, returning how many were
  /// removed. Backs the cascade when a borrower is rejected.
  async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, LendingError>;
}
