use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::WorkflowError;
use crate::domain::auth::access::require_role;
use crate::domain::auth::entities::SessionData;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::Role;

/// One pending borrower as the admin dashboard shows it
#[derive(Debug, Clone, Serialize)]
pub struct PendingBorrower {
  pub id: Uuid,
  pub username: String,
  pub registered_at: DateTime<Utc>,
}

/// Use case listing borrowers awaiting approval, in registration order.
/// Admin-gated.
pub struct ListPendingBorrowersUseCase {
  account_service: Arc<AccountService>,
}

impl ListPendingBorrowersUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(
    &self,
    session: Option<&SessionData>,
  ) -> Result<Vec<PendingBorrower>, WorkflowError> {
    require_role(session, Role::Admin)?;

    let pending = self.account_service.list_pending_borrowers().await?;

    Ok(
      pending
        .into_iter()
        .map(|account| PendingBorrower {
          id: account.id,
          username: account.username,
          registered_at: account.created_at,
        })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::{Password, Username};
  use crate::infrastructure::security::Argon2CredentialHasher;
  use crate::testing::{InMemoryAccountRepository, InMemoryLoanRepository};

  #[tokio::test]
  async fn test_lists_only_pending_borrowers_and_requires_admin() {
    let service = Arc::new(AccountService::new(
      Arc::new(InMemoryAccountRepository::new()),
      Arc::new(InMemoryLoanRepository::new()),
      Arc::new(Argon2CredentialHasher::new()),
    ));
    let use_case = ListPendingBorrowersUseCase::new(service.clone());

    service
      .register(
        Username::new("root").unwrap(),
        Password::new("pw").unwrap(),
        Role::Admin,
      )
      .await
      .unwrap();
    service
      .register(
        Username::new("alice").unwrap(),
        Password::new("pw").unwrap(),
        Role::Borrower,
      )
      .await
      .unwrap();

    let session = SessionData::new("root", Role::Admin);
    let pending = use_case.execute(Some(&session)).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].username, "alice");

    assert!(matches!(
      use_case.execute(None).await.unwrap_err(),
      WorkflowError::Unauthorized
    ));
  }
}
