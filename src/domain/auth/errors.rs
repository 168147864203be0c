use thiserror::Error;

use super::value_objects::ValueObjectError;

/// Main authentication/account error type.
///
/// The `Display` strings of the user-driven variants are the exact notices
/// the web layer shows, so they must not be reworded casually.
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Username already exists!")]
  UsernameTaken,

  #[error("Invalid username or password.")]
  InvalidCredentials,

  #[error("Your account is still pending admin approval.")]
  PendingApproval,

  #[error("Account not found")]
  AccountNotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Stored record is malformed: {0}")]
  Corrupted(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),
}

/// Raised by the access controller when a caller may not invoke an
/// operation. Callers translate this to a redirect, never a server fault.
#[derive(Debug, Error)]
pub enum AccessError {
  #[error("Unauthorized")]
  Unauthorized,
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    AuthError::Repository(RepositoryError::from(error))
  }
}
