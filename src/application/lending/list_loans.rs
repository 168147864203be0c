use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::WorkflowError;
use crate::domain::auth::access::require_role;
use crate::domain::auth::entities::SessionData;
use crate::domain::auth::ports::AccountRepository;
use crate::domain::auth::value_objects::Role;
use crate::domain::lending::entities::Loan;
use crate::domain::lending::services::LendingService;
use crate::domain::lending::value_objects::LoanStatus;

/// One loan as the dashboards show it
#[derive(Debug, Clone, Serialize)]
pub struct LoanSummary {
  pub id: Uuid,
  pub owner_username: String,
  pub amount: Decimal,
  pub interest_rate: Decimal,
  pub status: LoanStatus,
  pub submitted_at: DateTime<Utc>,
}

impl LoanSummary {
  pub(crate) fn from_loan(loan: Loan, owner_username: String) -> Self {
    Self {
      id: loan.id,
      owner_username,
      amount: loan.amount,
      interest_rate: loan.interest_rate,
      status: loan.status,
      submitted_at: loan.created_at,
    }
  }
}

/// Use case listing every loan for the admin dashboard, newest first,
/// with owner usernames resolved for display.
pub struct ListLoansUseCase {
  lending_service: Arc<LendingService>,
  account_repo: Arc<dyn AccountRepository>,
}

impl ListLoansUseCase {
  pub fn new(lending_service: Arc<LendingService>, account_repo: Arc<dyn AccountRepository>) -> Self {
    Self {
      lending_service,
      account_repo,
    }
  }

  pub async fn execute(
    &self,
    session: Option<&SessionData>,
  ) -> Result<Vec<LoanSummary>, WorkflowError> {
    require_role(session, Role::Admin)?;

    let loans = self.lending_service.list_all().await?;

    let mut summaries = Vec::with_capacity(loans.len());
    for loan in loans {
      // Rejection cascades over loans, so the owner should always exist;
      // the fallback keeps a half-deleted store from breaking the page.
      let owner_username = self
        .account_repo
        .find_by_id(loan.owner_id)
        .await?
        .map(|account| account.username)
        .unwrap_or_else(|| "(removed)".to_string());

      summaries.push(LoanSummary::from_loan(loan, owner_username));
    }

    Ok(summaries)
  }
}
