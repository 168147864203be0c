//! In-memory doubles for the repository ports, shared by service and
//! use-case tests. Insertion order is preserved, matching the registry
//! ordering the SQLite implementations get from their indexes.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::auth::entities::Account;
use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::auth::ports::AccountRepository;
use crate::domain::auth::value_objects::{AccountStatus, Role, Username};
use crate::domain::lending::entities::Loan;
use crate::domain::lending::errors::LendingError;
use crate::domain::lending::ports::LoanRepository;
use crate::domain::lending::value_objects::LoanTerms;

#[derive(Default)]
pub struct InMemoryAccountRepository {
  accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn count(&self) -> usize {
    self.accounts.lock().await.len()
  }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
  async fn create(&self, account: Account) -> Result<Account, AuthError> {
    let mut accounts = self.accounts.lock().await;

    if accounts.iter().any(|a| a.username == account.username) {
      return Err(AuthError::Repository(RepositoryError::DuplicateKey(
        account.username.clone(),
      )));
    }

    accounts.push(account.clone());
    Ok(account)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthError> {
    let accounts = self.accounts.lock().await;
    Ok(accounts.iter().find(|a| a.id == id).cloned())
  }

  async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AuthError> {
    let accounts = self.accounts.lock().await;
    Ok(
      accounts
        .iter()
        .find(|a| a.username == username.as_str())
        .cloned(),
    )
  }

  async fn find_by_username_and_role(
    &self,
    username: &Username,
    role: Role,
  ) -> Result<Option<Account>, AuthError> {
    let accounts = self.accounts.lock().await;
    Ok(
      accounts
        .iter()
        .find(|a| a.username == username.as_str() && a.role == role)
        .cloned(),
    )
  }

  async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), AuthError> {
    let mut accounts = self.accounts.lock().await;
    let account = accounts
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or(AuthError::Repository(RepositoryError::NotFound))?;

    account.update_password_hash(password_hash.to_string());
    Ok(())
  }

  async fn set_approved(&self, id: Uuid) -> Result<(), AuthError> {
    let mut accounts = self.accounts.lock().await;
    let account = accounts
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or(AuthError::Repository(RepositoryError::NotFound))?;

    account.approve();
    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<(), AuthError> {
    self.accounts.lock().await.retain(|a| a.id != id);
    Ok(())
  }

  async fn list_pending_borrowers(&self) -> Result<Vec<Account>, AuthError> {
    let accounts = self.accounts.lock().await;
    Ok(
      accounts
        .iter()
        .filter(|a| a.role == Role::Borrower && a.status == AccountStatus::Pending)
        .cloned()
        .collect(),
    )
  }
}

#[derive(Default)]
pub struct InMemoryLoanRepository {
  loans: Mutex<Vec<Loan>>,
}

impl InMemoryLoanRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn count(&self) -> usize {
    self.loans.lock().await.len()
  }

  /// Inserts a loan directly, bypassing term validation paths under test
  pub async fn seed(&self, owner_id: Uuid, amount: Decimal, rate: Decimal) -> Loan {
    let loan = Loan::new(owner_id, LoanTerms::new(amount, rate).expect("valid seed terms"));
    self.loans.lock().await.push(loan.clone());
    loan
  }
}

#[async_trait]
impl LoanRepository for InMemoryLoanRepository {
  async fn create(&self, loan: Loan) -> Result<Loan, LendingError> {
    self.loans.lock().await.push(loan.clone());
    Ok(loan)
  }

  async fn list_all(&self) -> Result<Vec<Loan>, LendingError> {
    Ok(self.loans.lock().await.clone())
  }

  async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Loan>, LendingError> {
    let loans = self.loans.lock().await;
    Ok(
      loans
        .iter()
        .filter(|l| l.owner_id == owner_id)
        .cloned()
        .collect(),
    )
  }

  async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, LendingError> {
    let mut loans = self.loans.lock().await;
    let before = loans.len();
    loans.retain(|l| l.owner_id != owner_id);
    Ok((before - loans.len()) as u64)
  }
}
