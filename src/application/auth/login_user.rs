use std::sync::Arc;

use crate::application::errors::WorkflowError;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Password, Role, Username};

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  pub username: String,
  pub password: String,
  /// The role the caller claims to hold; the lookup is scoped to it
  pub role: String,
}

/// Response after successful login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  pub username: String,
  /// Drives which dashboard the caller is routed to
  pub role: Role,
  /// Opaque session token for the cookie
  pub session_token: String,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the login state machine: lookup by (username, claimed
  /// role), credential verification with one-time legacy migration,
  /// approval check, then session establishment.
  ///
  /// # Errors
  /// * `AuthError::InvalidCredentials` - unknown account or wrong secret,
  ///   deliberately indistinguishable
  /// * `AuthError::PendingApproval` - verified but unapproved account
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, WorkflowError> {
    let username = Username::new(command.username).map_err(AuthError::from)?;
    let password = Password::new(command.password).map_err(AuthError::from)?;
    let role = command.role.parse::<Role>().map_err(AuthError::from)?;

    let (account, session_token) = self.auth_service.login(username, password, role).await?;

    Ok(LoginUserResponse {
      username: account.username,
      role: account.role,
      session_token,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::services::{AccountService, AuthService};
  use crate::infrastructure::security::Argon2CredentialHasher;
  use crate::infrastructure::session::InMemorySessionStore;
  use crate::testing::{InMemoryAccountRepository, InMemoryLoanRepository};

  fn services() -> (Arc<AccountService>, LoginUserUseCase) {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let hasher = Arc::new(Argon2CredentialHasher::new());
    let registry = Arc::new(AccountService::new(
      accounts.clone(),
      Arc::new(InMemoryLoanRepository::new()),
      hasher.clone(),
    ));
    let auth = AuthService::new(
      accounts,
      hasher,
      Arc::new(InMemorySessionStore::new(chrono::Duration::hours(1))),
    );
    (registry, LoginUserUseCase::new(Arc::new(auth)))
  }

  #[tokio::test]
  async fn test_admin_login_routes_to_admin_role() {
    let (registry, login) = services();
    registry
      .register(
        Username::new("root").unwrap(),
        Password::new("hunter2").unwrap(),
        Role::Admin,
      )
      .await
      .unwrap();

    let response = login
      .execute(LoginUserCommand {
        username: "root".to_string(),
        password: "hunter2".to_string(),
        role: "admin".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(response.role, Role::Admin);
    assert!(!response.session_token.is_empty());
  }

  #[tokio::test]
  async fn test_failed_login_notice_wording() {
    let (_registry, login) = services();

    let err = login
      .execute(LoginUserCommand {
        username: "ghost".to_string(),
        password: "pw".to_string(),
        role: "admin".to_string(),
      })
      .await
      .unwrap_err();

    assert!(err.is_user_facing());
    assert_eq!(err.to_string(), "Invalid username or password.");
  }

  #[tokio::test]
  async fn test_pending_borrower_notice_wording() {
    let (registry, login) = services();
    registry
      .register(
        Username::new("alice").unwrap(),
        Password::new("pw1").unwrap(),
        Role::Borrower,
      )
      .await
      .unwrap();

    let err = login
      .execute(LoginUserCommand {
        username: "alice".to_string(),
        password: "pw1".to_string(),
        role: "borrower".to_string(),
      })
      .await
      .unwrap_err();

    assert_eq!(
      err.to_string(),
      "Your account is still pending admin approval."
    );
  }
}
