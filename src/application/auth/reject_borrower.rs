use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::WorkflowError;
use crate::domain::auth::access::require_role;
use crate::domain::auth::entities::SessionData;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::Role;

/// Response after a rejection attempt; None notice means the target was
/// already gone and the call was a no-op.
#[derive(Debug, Clone)]
pub struct RejectBorrowerResponse {
  pub notice: Option<&'static str>,
}

/// Use case for rejecting a borrower: deletes the account and its loans
/// permanently. Admin-gated.
pub struct RejectBorrowerUseCase {
  account_service: Arc<AccountService>,
}

impl RejectBorrowerUseCase {
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
  ) -> Result<RejectBorrowerResponse, WorkflowError> {
    require_role(session, Role::Admin)?;

    match self.account_service.reject(target_id).await {
      Ok(()) => Ok(RejectBorrowerResponse {
        notice: Some("Borrower rejected and removed."),
      }),
      Err(AuthError::AccountNotFound) => Ok(RejectBorrowerResponse { notice: None }),
      Err(e) => Err(e.into()),
    }
  }
}
