use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Account, SessionData};
use super::errors::AuthError;
use super::value_objects::{Password, Role, Username};

/// Repository trait for account persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
  /// Creates a new account in the repository
  async fn create(&self, account: Account) -> Result<Account, AuthError>;

  /// Finds an account by its unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthError>;

  /// Finds an account by username (case-sensitive exact match)
  async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AuthError>;

  /// Finds an account by username and role. Used at login so a credential
  /// registered under one role cannot authenticate as the other.
  async fn find_by_username_and_role(
    &self,
    username: &Username,
    role: Role,
  ) -> Result<Option<Account>, AuthError>;

  /// Replaces the stored credential digest for an account
  async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), AuthError>;

  /// Sets the account status to approved
  async fn set_approved(&self, id: Uuid) -> Result<(), AuthError>;

  /// Permanently deletes an account. There is no soft delete.
  async fn delete(&self, id: Uuid) -> Result<(), AuthError>;

  /// All pending borrower accounts, in registration order
  async fn list_pending_borrowers(&self) -> Result<Vec<Account>, AuthError>;
}

/// Service trait for credential hashing. The implementation is stateless;
/// callers decide when to persist a new digest.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Produces a salted one-way digest of the secret
  async fn hash(&self, password: &Password) -> Result<String, AuthError>;

  /// Verifies a secret against a stored digest. Returns false on any
  /// mismatch, including a malformed digest; it never errors.
  async fn verify(&self, password: &Password, digest: &str) -> bool;

  /// Detects digests missing the expected hash-scheme tag. Such values
  /// are historical plaintext passwords awaiting migration.
  fn is_legacy_plaintext(&self, digest: &str) -> bool;

  /// Compares a secret against a legacy plaintext value
  fn verify_legacy_plaintext(&self, password: &Password, stored: &str) -> bool;
}

/// Store for ephemeral per-caller sessions, keyed by an opaque token
#[async_trait]
pub trait SessionStore: Send + Sync {
  /// Establishes a session and returns the opaque token handed to the caller
  async fn establish(&self, data: SessionData) -> Result<String, AuthError>;

  /// Resolves a token to its session, if present and not expired
  async fn get(&self, token: &str) -> Result<Option<SessionData>, AuthError>;

  /// Clears a session. Clearing an unknown token is a no-op.
  async fn clear(&self, token: &str) -> Result<(), AuthError>;
}
