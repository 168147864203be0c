use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::WorkflowError;
use crate::domain::auth::access::require_role;
use crate::domain::auth::entities::SessionData;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::Role;

/// Response after an approval attempt. `notice` is None when the target
/// no longer existed: that case is deliberately swallowed as a no-op.
#[derive(Debug, Clone)]
pub struct ApproveBorrowerResponse {
  pub notice: Option<String>,
}

/// Use case for approving a pending borrower. Admin-gated.
pub struct ApproveBorrowerUseCase {
  account_service: Arc<AccountService>,
}

impl ApproveBorrowerUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// # Errors
  /// Returns `WorkflowError::Unauthorized` unless the session holds the
  /// admin role.
  pub async fn execute(
    &self,
    session: Option<&SessionData>,
    target_id: Uuid,
  ) -> Result<ApproveBorrowerResponse, WorkflowError> {
    require_role(session, Role::Admin)?;

    match self.account_service.approve(target_id).await {
      Ok(account) => Ok(ApproveBorrowerResponse {
        notice: Some(format!("Borrower '{}' approved!", account.username)),
      }),
      Err(AuthError::AccountNotFound) => Ok(ApproveBorrowerResponse { notice: None }),
      Err(e) => Err(e.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::{Password, Username};
  use crate::infrastructure::security::Argon2CredentialHasher;
  use crate::testing::{InMemoryAccountRepository, InMemoryLoanRepository};

  fn setup() -> (Arc<AccountService>, ApproveBorrowerUseCase) {
    let service = Arc::new(AccountService::new(
      Arc::new(InMemoryAccountRepository::new()),
      Arc::new(InMemoryLoanRepository::new()),
      Arc::new(Argon2CredentialHasher::new()),
    ));
    (service.clone(), ApproveBorrowerUseCase::new(service))
  }

  fn admin_session() -> SessionData {
    SessionData::new("root", Role::Admin)
  }

  #[tokio::test]
  async fn test_approve_notice_names_the_borrower() {
    let (service, use_case) = setup();
    let borrower = service
      .register(
        Username::new("alice").unwrap(),
        Password::new("pw1").unwrap(),
        Role::Borrower,
      )
      .await
      .unwrap();

    let session = admin_session();
    let response = use_case.execute(Some(&session), borrower.id).await.unwrap();

    assert_eq!(response.notice.as_deref(), Some("Borrower 'alice' approved!"));
  }

  #[tokio::test]
  async fn test_missing_target_is_swallowed() {
    let (_service, use_case) = setup();

    let session = admin_session();
    let response = use_case
      .execute(Some(&session), Uuid::new_v4())
      .await
      .unwrap();

    assert!(response.notice.is_none());
  }

  #[tokio::test]
  async fn test_non_admin_is_unauthorized() {
    let (service, use_case) = setup();
    let borrower = service
      .register(
        Username::new("alice").unwrap(),
        Password::new("pw1").unwrap(),
        Role::Borrower,
      )
      .await
      .unwrap();

    let session = SessionData::new("mallory", Role::Borrower);
    let err = use_case
      .execute(Some(&session), borrower.id)
      .await
      .unwrap_err();
    assert!(matches!(err, WorkflowError::Unauthorized));

    let err = use_case.execute(None, borrower.id).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Unauthorized));
  }
}
