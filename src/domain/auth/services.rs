use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Account, SessionData};
use super::errors::{AuthError, RepositoryError};
use super::ports::{AccountRepository, PasswordHasher, SessionStore};
use super::value_objects::{Password, Role, Username};
use crate::domain::lending::ports::LoanRepository;

/// Account registry service: creation, approval workflow and queries.
pub struct AccountService {
  account_repo: Arc<dyn AccountRepository>,
  loan_repo: Arc<dyn LoanRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
  pub fn new(
    account_repo: Arc<dyn AccountRepository>,
    loan_repo: Arc<dyn LoanRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
  ) -> Self {
    Self {
      account_repo,
      loan_repo,
      password_hasher,
    }
  }

  /// Registers a new account with a hashed credential.
  ///
  /// Admins come out approved, borrowers pending. Registration never
  /// establishes a session; the user logs in afterwards.
  ///
  /// # Errors
  /// Returns `AuthError::UsernameTaken` if the username exists (exact,
  /// case-sensitive match).
  pub async fn register(
    &self,
    username: Username,
    password: Password,
    role: Role,
  ) -> Result<Account, AuthError> {
    if let Some(_existing) = self.account_repo.find_by_username(&username).await? {
      return Err(AuthError::UsernameTaken);
    }

    let password_hash = self.password_hasher.hash(&password).await?;
    let account = Account::new(username.into_inner(), password_hash, role);

    // The unique index closes the lookup/insert race under concurrent
    // registrations.
    match self.account_repo.create(account).await {
      Ok(account) => Ok(account),
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AuthError::UsernameTaken)
      }
      Err(e) => Err(e),
    }
  }

  /// Approves a pending borrower. Idempotent for already-approved accounts.
  ///
  /// # Errors
  /// Returns `AuthError::AccountNotFound` if no such account exists.
  pub async fn approve(&self, account_id: Uuid) -> Result<Account, AuthError> {
    let mut account = self
      .account_repo
      .find_by_id(account_id)
      .await?
      .ok_or(AuthError::AccountNotFound)?;

    if !account.is_approved() {
      self.account_repo.set_approved(account_id).await?;
      account.approve();
    }

    Ok(account)
  }

  /// Rejects an account: deletes it permanently together with any loans it
  /// owns, so no loan is ever left orphaned.
  ///
  /// # Errors
  /// Returns `AuthError::AccountNotFound` if no such account exists.
  pub async fn reject(&self, account_id: Uuid) -> Result<(), AuthError> {
    let account = self
      .account_repo
      .find_by_id(account_id)
      .await?
      .ok_or(AuthError::AccountNotFound)?;

    let loans_removed = self
      .loan_repo
      .delete_by_owner(account_id)
      .await
      .map_err(|e| AuthError::Repository(RepositoryError::QueryFailed(e.to_string())))?;

    self.account_repo.delete(account_id).await?;

    tracing::info!(
      username = %account.username,
      loans_removed,
      "rejected borrower and removed account"
    );

    Ok(())
  }

  /// All borrower accounts awaiting approval, in registration order.
  pub async fn list_pending_borrowers(&self) -> Result<Vec<Account>, AuthError> {
    self.account_repo.list_pending_borrowers().await
  }

  pub async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AuthError> {
    self.account_repo.find_by_username(username).await
  }
}

/// Authentication service: the login state machine and session lifecycle.
pub struct AuthService {
  account_repo: Arc<dyn AccountRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  session_store: Arc<dyn SessionStore>,
}

impl AuthService {
  pub fn new(
    account_repo: Arc<dyn AccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    session_store: Arc<dyn SessionStore>,
  ) -> Self {
    Self {
      account_repo,
      password_hasher,
      session_store,
    }
  }

  /// Authenticates a user and establishes a session.
  ///
  /// The lookup is by (username, claimed role), so a borrower credential
  /// cannot log in as admin. An absent account and a wrong password both
  /// yield `InvalidCredentials`, which renders identically; neither leaks
  /// which field failed.
  ///
  /// Accounts whose stored digest predates hashed storage are migrated
  /// here: the secret is checked against the plaintext value first and the
  /// digest is rewritten only after it verified. The migration runs once
  /// per legacy account and is logged.
  ///
  /// # Errors
  /// * `AuthError::InvalidCredentials` - unknown (username, role) pair or
  ///   wrong password
  /// * `AuthError::PendingApproval` - credential verified but the account
  ///   is not approved; no session is established
  pub async fn login(
    &self,
    username: Username,
    password: Password,
    claimed_role: Role,
  ) -> Result<(Account, String), AuthError> {
    let mut account = self
      .account_repo
      .find_by_username_and_role(&username, claimed_role)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    if self.password_hasher.is_legacy_plaintext(&account.password_hash) {
      if !self
        .password_hasher
        .verify_legacy_plaintext(&password, &account.password_hash)
      {
        return Err(AuthError::InvalidCredentials);
      }

      let new_hash = self.password_hasher.hash(&password).await?;
      self
        .account_repo
        .update_password_hash(account.id, &new_hash)
        .await?;
      account.update_password_hash(new_hash);

      tracing::info!(username = %account.username, "migrated legacy plaintext credential");
    } else if !self
      .password_hasher
      .verify(&password, &account.password_hash)
      .await
    {
      return Err(AuthError::InvalidCredentials);
    }

    if !account.is_approved() {
      return Err(AuthError::PendingApproval);
    }

    let token = self
      .session_store
      .establish(SessionData::new(account.username.clone(), account.role))
      .await?;

    Ok((account, token))
  }

  /// Clears the session behind the token. Unknown tokens are a no-op.
  pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
    self.session_store.clear(token).await
  }

  /// Resolves a session token to its authenticated context, if any.
  pub async fn resolve_session(&self, token: &str) -> Result<Option<SessionData>, AuthError> {
    self.session_store.get(token).await
  }
}
