use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{AccountStatus, Role};

/// Account entity representing a registered identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
  /// Unique identifier for the account
  pub id: Uuid,
  /// Unique, case-sensitive username
  pub username: String,
  /// Hashed password. Historically this column held plaintext; such rows
  /// are detected by the missing scheme tag and migrated on first login.
  pub password_hash: String,
  /// Role fixed at registration
  pub role: Role,
  /// Approval status; only an approved admin mutates this
  pub status: AccountStatus,
  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the account was last updated
  pub updated_at: DateTime<Utc>,
}

impl Account {
  /// Creates a new account. Admins are approved immediately; borrowers
  /// wait for an admin to approve them.
  pub fn new(username: String, password_hash: String, role: Role) -> Self {
    let now = Utc::now();
    let status = match role {
      Role::Admin => AccountStatus::Approved,
      Role::Borrower => AccountStatus::Pending,
    };
    Self {
      id: Uuid::new_v4(),
      username,
      password_hash,
      role,
      status,
      created_at: now,
      updated_at: now,
    }
  }

  /// Reconstructs an account from stored fields
  pub fn from_db(
    id: Uuid,
    username: String,
    password_hash: String,
    role: Role,
    status: AccountStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      username,
      password_hash,
      role,
      status,
      created_at,
      updated_at,
    }
  }

  /// Replaces the stored credential digest
  pub fn update_password_hash(&mut self, new_hash: String) {
    self.password_hash = new_hash;
    self.updated_at = Utc::now();
  }

  /// Marks the account approved. Approving an approved account is a no-op.
  pub fn approve(&mut self) {
    if self.status != AccountStatus::Approved {
      self.status = AccountStatus::Approved;
      self.updated_at = Utc::now();
    }
  }

  pub fn is_approved(&self) -> bool {
    self.status.is_approved()
  }
}

/// Ephemeral authenticated context for one browser session. Never
/// persisted; lives in the session store and dies with the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
  pub username: String,
  pub role: Role,
}

impl SessionData {
  pub fn new(username: impl Into<String>, role: Role) -> Self {
    Self {
      username: username.into(),
      role,
    }
  }
}
