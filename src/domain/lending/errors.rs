use thiserror::Error;

use super::value_objects::ValueObjectError;

#[derive(Debug, Error)]
pub enum LendingError {
  #[error("Invalid loan terms: {0}")]
  InvalidTerms(#[from] ValueObjectError),

  #[error("Owning account not found")]
  OwnerNotFound,

  #[error("Repository error: {0}")]
  Repository(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
