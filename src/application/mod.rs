//! Application workflows orchestrating the domain services. Each use case
//! gates access through the role gate, runs one atomic state transition,
//! and surfaces a user-facing notice.

pub mod auth;
pub mod errors;
pub mod lending;

pub use errors::WorkflowError;

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use rust_decimal_macros::dec;

  use super::auth::{
    ApproveBorrowerUseCase, ListPendingBorrowersUseCase, LoginUserCommand, LoginUserUseCase,
    RegisterAccountCommand, RegisterAccountUseCase,
  };
  use super::errors::WorkflowError;
  use super::lending::{ApplyForLoanCommand, ApplyForLoanUseCase, ListLoansUseCase};
  use crate::domain::auth::entities::SessionData;
  use crate::domain::auth::services::{AccountService, AuthService};
  use crate::domain::auth::value_objects::Role;
  use crate::domain::lending::services::LendingService;
  use crate::domain::lending::value_objects::LoanStatus;
  use crate::infrastructure::security::Argon2CredentialHasher;
  use crate::infrastructure::session::InMemorySessionStore;
  use crate::testing::{InMemoryAccountRepository, InMemoryLoanRepository};

  struct App {
    register: RegisterAccountUseCase,
    login: LoginUserUseCase,
    approve: ApproveBorrowerUseCase,
    pending: ListPendingBorrowersUseCase,
    apply: ApplyForLoanUseCase,
    loans: ListLoansUseCase,
    auth_service: Arc<AuthService>,
  }

  fn app() -> App {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let loan_repo = Arc::new(InMemoryLoanRepository::new());
    let hasher = Arc::new(Argon2CredentialHasher::new());
    let sessions = Arc::new(InMemorySessionStore::new(chrono::Duration::hours(1)));

    let account_service = Arc::new(AccountService::new(
      accounts.clone(),
      loan_repo.clone(),
      hasher.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(accounts.clone(), hasher, sessions));
    let lending_service = Arc::new(LendingService::new(loan_repo.clone()));

    App {
      register: RegisterAccountUseCase::new(account_service.clone()),
      login: LoginUserUseCase::new(auth_service.clone()),
      approve: ApproveBorrowerUseCase::new(account_service.clone()),
      pending: ListPendingBorrowersUseCase::new(account_service.clone()),
      apply: ApplyForLoanUseCase::new(account_service.clone(), lending_service.clone()),
      loans: ListLoansUseCase::new(lending_service, accounts),
      auth_service,
    }
  }

  fn login_command(username: &str, password: &str, role: &str) -> LoginUserCommand {
    LoginUserCommand {
      username: username.to_string(),
      password: password.to_string(),
      role: role.to_string(),
    }
  }

  /// The full borrower journey: register, wait for approval, log in,
  /// file a loan, show up on the admin dashboard.
  #[tokio::test]
  async fn test_borrower_journey_end_to_end() {
    let app = app();

    // Admin self-registers and is immediately usable.
    app
      .register
      .execute(RegisterAccountCommand {
        username: "root".to_string(),
        password: "admin-pw".to_string(),
        role: "admin".to_string(),
      })
      .await
      .unwrap();

    // Alice registers as borrower and lands in the approval queue.
    let alice = app
      .register
      .execute(RegisterAccountCommand {
        username: "alice".to_string(),
        password: "pw1".to_string(),
        role: "borrower".to_string(),
      })
      .await
      .unwrap();
    assert_eq!(alice.notice, "Borrower registration submitted for approval.");

    // Correct credentials, but no session while pending.
    let err = app
      .login
      .execute(login_command("alice", "pw1", "borrower"))
      .await
      .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Your account is still pending admin approval."
    );

    // Admin logs in and sees alice in the queue.
    let admin_login = app
      .login
      .execute(login_command("root", "admin-pw", "admin"))
      .await
      .unwrap();
    let admin_session = app
      .auth_service
      .resolve_session(&admin_login.session_token)
      .await
      .unwrap()
      .unwrap();

    let queue = app.pending.execute(Some(&admin_session)).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].username, "alice");

    // Approval unblocks the login.
    let approved = app
      .approve
      .execute(Some(&admin_session), alice.account_id)
      .await
      .unwrap();
    assert_eq!(approved.notice.as_deref(), Some("Borrower 'alice' approved!"));

    let alice_login = app
      .login
      .execute(login_command("alice", "pw1", "borrower"))
      .await
      .unwrap();
    assert_eq!(alice_login.role, Role::Borrower);
    let alice_session = app
      .auth_service
      .resolve_session(&alice_login.session_token)
      .await
      .unwrap()
      .unwrap();

    // Alice files a loan; the admin dashboard lists it as pending.
    let filed = app
      .apply
      .execute(
        Some(&alice_session),
        ApplyForLoanCommand {
          amount: dec!(1000),
          interest_rate: dec!(5),
        },
      )
      .await
      .unwrap();
    assert_eq!(filed.notice, "Loan application submitted!");

    let loans = app.loans.execute(Some(&admin_session)).await.unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].owner_username, "alice");
    assert_eq!(loans[0].amount, dec!(1000));
    assert_eq!(loans[0].interest_rate, dec!(5));
    assert_eq!(loans[0].status, LoanStatus::Pending);
  }

  /// An admin session cannot use borrower-only workflows.
  #[tokio::test]
  async fn test_admin_cannot_file_loans() {
    let app = app();

    let session = SessionData::new("root", Role::Admin);
    let err = app
      .apply
      .execute(
        Some(&session),
        ApplyForLoanCommand {
          amount: dec!(1000),
          interest_rate: dec!(5),
        },
      )
      .await
      .unwrap_err();

    assert!(matches!(err, WorkflowError::Unauthorized));
    assert!(
      app
        .loans
        .execute(Some(&session))
        .await
        .unwrap()
        .is_empty()
    );
  }
}
