use std::sync::Arc;

use crate::application::errors::WorkflowError;
use crate::application::lending::list_loans::LoanSummary;
use crate::domain::auth::access::require_role;
use crate::domain::auth::entities::SessionData;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::{Role, Username};
use crate::domain::lending::services::LendingService;

/// Use case listing the acting borrower's own loans for their dashboard.
pub struct ListOwnLoansUseCase {
  account_service: Arc<AccountService>,
  lending_service: Arc<LendingService>,
}

impl ListOwnLoansUseCase {
  pub fn new(account_service: Arc<AccountService>, lending_service: Arc<LendingService>) -> Self {
    Self {
      account_service,
      lending_service,
    }
  }

  pub async fn execute(
    &self,
    session: Option<&SessionData>,
  ) -> Result<Vec<LoanSummary>, WorkflowError> {
    let session = require_role(session, Role::Borrower)?;

    let username =
      Username::new(session.username.as_str()).map_err(|_| WorkflowError::Unauthorized)?;
    let account = self
      .account_service
      .find_by_username(&username)
      .await?
      .ok_or(WorkflowError::Unauthorized)?;

    let loans = self.lending_service.list_by_owner(account.id).await?;

    Ok(
      loans
        .into_iter()
        .map(|loan| LoanSummary::from_loan(loan, account.username.clone()))
        .collect(),
    )
  }
}
