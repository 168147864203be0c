use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::WorkflowError;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::{Password, Role, Username};

/// Command for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
  pub username: String,
  /// Plain secret, hashed before storage
  pub password: String,
  /// "admin" or "borrower"
  pub role: String,
}

/// Response after successful registration. Registration never establishes
/// a session; the user logs in afterwards.
#[derive(Debug, Clone)]
pub struct RegisterAccountResponse {
  pub account_id: Uuid,
  pub username: String,
  pub role: Role,
  /// Role-appropriate user-facing notice
  pub notice: &'static str,
}

/// Use case for registering a new account
pub struct RegisterAccountUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterAccountUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// # Errors
  /// Returns `AuthError::UsernameTaken` (as a WorkflowError) when the
  /// username exists, and validation errors for unusable input.
  pub async fn execute(
    &self,
    command: RegisterAccountCommand,
  ) -> Result<RegisterAccountResponse, WorkflowError> {
    let username = Username::new(command.username).map_err(AuthError::from)?;
    let password = Password::new(command.password).map_err(AuthError::from)?;
    let role = command.role.parse::<Role>().map_err(AuthError::from)?;

    let account = self.account_service.register(username, password, role).await?;

    let notice = match role {
      Role::Admin => "Admin registered successfully!",
      Role::Borrower => "Borrower registration submitted for approval.",
    };

    Ok(RegisterAccountResponse {
      account_id: account.id,
      username: account.username,
      role: account.role,
      notice,
    })
  }
}
