use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::lending::{
  entities::Loan, errors::LendingError, ports::LoanRepository, value_objects::LoanStatus,
};

/// SQLite implementation of the LoanRepository trait
pub struct SqliteLoanRepository {
  pool: SqlitePool,
}

impl SqliteLoanRepository {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the loans table. Monetary columns are TEXT:
/// SQLite has no decimal type and REAL would betray the money semantics.
#[derive(Debug, sqlx::FromRow)]
struct LoanRow {
  id: String,
  owner_id: String,
  amount: String,
  interest_rate: String,
  status: String,
  created_at: DateTime<Utc>,
}

impl TryFrom<LoanRow> for Loan {
  type Error = LendingError;

  fn try_from(row: LoanRow) -> Result<Self, Self::Error> {
    let id = Uuid::parse_str(&row.id)
      .map_err(|e| LendingError::Repository(format!("loan id: {}", e)))?;
    let owner_id = Uuid::parse_str(&row.owner_id)
      .map_err(|e| LendingError::Repository(format!("loan owner id: {}", e)))?;
    let amount = Decimal::from_str(&row.amount)
      .map_err(|e| LendingError::Repository(format!("loan amount: {}", e)))?;
    let interest_rate = Decimal::from_str(&row.interest_rate)
      .map_err(|e| LendingError::Repository(format!("loan interest rate: {}", e)))?;
    let status = row
      .status
      .parse::<LoanStatus>()
      .map_err(|e| LendingError::Repository(e.to_string()))?;

    Ok(Loan::from_db(
      id,
      owner_id,
      amount,
      interest_rate,
      status,
      row.created_at,
    ))
  }
}

#[async_trait]
impl LoanRepository for SqliteLoanRepository {
  async fn create(&self, loan: Loan) -> Result<Loan, LendingError> {
    sqlx::query(
      r#"
      INSERT INTO loans (id, owner_id, amount, interest_rate, status, created_at)
      VALUES (?1, ?2, ?3, ?4, ?5, ?6)
      "#,
    )
    .bind(loan.id.to_string())
    .bind(loan.owner_id.to_string())
    .bind(loan.amount.to_string())
    .bind(loan.interest_rate.to_string())
    .bind(loan.status.as_str())
    .bind(loan.created_at)
    .execute(&self.pool)
    .await?;

    Ok(loan)
  }

  async fn list_all(&self) -> Result<Vec<Loan>, LendingError> {
    let rows = sqlx::query_as::<_, LoanRow>(
      r#"
      SELECT id, owner_id, amount, interest_rate, status, created_at
      FROM loans
      ORDER BY created_at DESC
      "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(Loan::try_from).collect()
  }

  async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Loan>, LendingError> {
    let rows = sqlx::query_as::<_, LoanRow>(
      r#"
      SELECT id, owner_id, amount, interest_rate, status, created_at
      FROM loans
      WHERE owner_id = ?1
      ORDER BY created_at DESC
      "#,
    )
    .bind(owner_id.to_string())
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(Loan::try_from).collect()
  }

  async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, LendingError> {
    let result = sqlx::query("DELETE FROM loans WHERE owner_id = ?1")
      .bind(owner_id.to_string())
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected())
  }
}
