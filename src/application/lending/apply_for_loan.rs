use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::WorkflowError;
use crate::domain::auth::access::require_role;
use crate::domain::auth::entities::SessionData;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::{Role, Username};
use crate::domain::lending::services::LendingService;

/// Command for filing a loan application
#[derive(Debug, Clone)]
pub struct ApplyForLoanCommand {
  pub amount: Decimal,
  pub interest_rate: Decimal,
}

/// Response after a successful application
#[derive(Debug, Clone)]
pub struct ApplyForLoanResponse {
  pub loan_id: Uuid,
  pub notice: &'static str,
}

/// Use case for submitting a loan application. Borrower-gated; the owning
/// account is resolved from the session, never from caller input.
pub struct ApplyForLoanUseCase {
  account_service: Arc<AccountService>,
  lending_service: Arc<LendingService>,
}

impl ApplyForLoanUseCase {
  pub fn new(account_service: Arc<AccountService>, lending_service: Arc<LendingService>) -> Self {
    Self {
      account_service,
      lending_service,
    }
  }

  /// # Errors
  /// * `WorkflowError::Unauthorized` - no borrower session, or the session
  ///   points at an account that no longer exists
  /// * `LendingError::InvalidTerms` - amount <= 0 or rate < 0
  pub async fn execute(
    &self,
    session: Option<&SessionData>,
    command: ApplyForLoanCommand,
  ) -> Result<ApplyForLoanResponse, WorkflowError> {
    let session = require_role(session, Role::Borrower)?;

    // A session can outlive its account (rejection while logged in);
    // such callers are anonymous again.
    let username =
      Username::new(session.username.as_str()).map_err(|_| WorkflowError::Unauthorized)?;
    let account = self
      .account_service
      .find_by_username(&username)
      .await?
      .ok_or(WorkflowError::Unauthorized)?;

    let loan = self
      .lending_service
      .apply(account.id, command.amount, command.interest_rate)
      .await?;

    Ok(ApplyForLoanResponse {
      loan_id: loan.id,
      notice: "Loan application submitted!",
    })
  }
}
