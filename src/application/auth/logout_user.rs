use std::sync::Arc;

use crate::application::errors::WorkflowError;
use crate::domain::auth::services::AuthService;

/// Use case for logging out: clears the server-side session. An unknown
/// or already-cleared token is a no-op; the notice is shown either way.
pub struct LogoutUserUseCase {
  auth_service: Arc<AuthService>,
}

#[derive(Debug, Clone)]
pub struct LogoutUserResponse {
  pub notice: &'static str,
}

impl LogoutUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  pub async fn execute(&self, token: &str) -> Result<LogoutUserResponse, WorkflowError> {
    self.auth_service.logout(token).await?;

    Ok(LogoutUserResponse {
      notice: "You have been logged out.",
    })
  }
}
