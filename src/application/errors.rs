use thiserror::Error;

use crate::domain::auth::errors::{AccessError, AuthError};
use crate::domain::lending::errors::LendingError;

/// Error type at the workflow boundary. Everything except `Unauthorized`
/// keeps the underlying notice wording via transparent display; handlers
/// turn Unauthorized into a redirect to the entry view without revealing
/// why.
#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("Unauthorized")]
  Unauthorized,

  #[error(transparent)]
  Auth(#[from] AuthError),

  #[error(transparent)]
  Lending(#[from] LendingError),
}

impl From<AccessError> for WorkflowError {
  fn from(_: AccessError) -> Self {
    WorkflowError::Unauthorized
  }
}

impl WorkflowError {
  /// True for failures the user can act on; these become flash notices.
  /// The rest are infrastructure faults surfaced as a server error.
  pub fn is_user_facing(&self) -> bool {
    match self {
      WorkflowError::Unauthorized => false,
      WorkflowError::Auth(e) => matches!(
        e,
        AuthError::UsernameTaken
          | AuthError::InvalidCredentials
          | AuthError::PendingApproval
          | AuthError::Validation(_)
      ),
      WorkflowError::Lending(e) => matches!(e, LendingError::InvalidTerms(_)),
    }
  }
}
