use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::Account,
  errors::{AuthError, RepositoryError},
  ports::AccountRepository,
  value_objects::{Role, Username, ValueObjectError},
};

/// SQLite implementation of the AccountRepository trait
pub struct SqliteAccountRepository {
  pool: SqlitePool,
}

impl SqliteAccountRepository {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the accounts table. Ids and enums are stored
/// as TEXT and parsed on the way out.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: String,
  username: String,
  password_hash: String,
  role: String,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
  type Error = RepositoryError;

  fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
    let id = Uuid::parse_str(&row.id)
      .map_err(|e| RepositoryError::Corrupted(format!("account id: {}", e)))?;
    let role = row
      .role
      .parse::<Role>()
      .map_err(|e: ValueObjectError| RepositoryError::Corrupted(e.to_string()))?;
    let status = row
      .status
      .parse()
      .map_err(|e: ValueObjectError| RepositoryError::Corrupted(e.to_string()))?;

    Ok(Account::from_db(
      id,
      row.username,
      row.password_hash,
      role,
      status,
      row.created_at,
      row.updated_at,
    ))
  }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
  async fn create(&self, account: Account) -> Result<Account, AuthError> {
    sqlx::query(
      r#"
      INSERT INTO accounts (id, username, password_hash, role, status, created_at, updated_at)
      VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
      "#,
    )
    .bind(account.id.to_string())
    .bind(&account.username)
    .bind(&account.password_hash)
    .bind(account.role.as_str())
    .bind(account.status.as_str())
    .bind(account.created_at)
    .bind(account.updated_at)
    .execute(&self.pool)
    .await?;

    Ok(account)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
      SELECT id, username, password_hash, role, status, created_at, updated_at
      FROM accounts
      WHERE id = ?1
      "#,
    )
    .bind(id.to_string())
    .fetch_optional(&self.pool)
    .await?;

    row
      .map(Account::try_from)
      .transpose()
      .map_err(AuthError::Repository)
  }

  async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AuthError> {
    // TEXT comparison in SQLite is case-sensitive unless a NOCASE
    // collation is declared; the schema declares none, which is exactly
    // the exact-match semantics usernames require.
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
      SELECT id, username, password_hash, role, status, created_at, updated_at
      FROM accounts
      WHERE username = ?1
      "#,
    )
    .bind(username.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row
      .map(Account::try_from)
      .transpose()
      .map_err(AuthError::Repository)
  }

  async fn find_by_username_and_role(
    &self,
    username: &Username,
    role: Role,
  ) -> Result<Option<Account>, AuthError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
      SELECT id, username, password_hash, role, status, created_at, updated_at
      FROM accounts
      WHERE username = ?1 AND role = ?2
      "#,
    )
    .bind(username.as_str())
    .bind(role.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row
      .map(Account::try_from)
      .transpose()
      .map_err(AuthError::Repository)
  }

  async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), AuthError> {
    let result =
      sqlx::query("UPDATE accounts SET password_hash = ?2, updated_at = ?3 WHERE id = ?1")
        .bind(id.to_string())
        .bind(password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

    if result.rows_affected() == 0 {
      return Err(AuthError::Repository(RepositoryError::NotFound));
    }
    Ok(())
  }

  async fn set_approved(&self, id: Uuid) -> Result<(), AuthError> {
    let result =
      sqlx::query("UPDATE accounts SET status = 'approved', updated_at = ?2 WHERE id = ?1")
        .bind(id.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

    if result.rows_affected() == 0 {
      return Err(AuthError::Repository(RepositoryError::NotFound));
    }
    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<(), AuthError> {
    sqlx::query("DELETE FROM accounts WHERE id = ?1")
      .bind(id.to_string())
      .execute(&self.pool)
      .await?;

    Ok(())
  }

  async fn list_pending_borrowers(&self) -> Result<Vec<Account>, AuthError> {
    let rows = sqlx::query_as::<_, AccountRow>(
      r#"
      SELECT id, username, password_hash, role, status, created_at, updated_at
      FROM accounts
      WHERE role = 'borrower' AND status = 'pending'
      ORDER BY created_at ASC
      "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows
      .into_iter()
      .map(|row| Account::try_from(row).map_err(AuthError::Repository))
      .collect()
  }
}
