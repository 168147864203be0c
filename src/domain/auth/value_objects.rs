use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Username cannot be empty")]
  EmptyUsername,

  #[error("Username cannot exceed {max} characters")]
  UsernameTooLong { max: usize },

  #[error("Password cannot be empty")]
  EmptyPassword,

  #[error("Password cannot exceed {max} characters")]
  PasswordTooLong { max: usize },

  #[error("Unknown role: {0}")]
  UnknownRole(String),

  #[error("Unknown account status: {0}")]
  UnknownStatus(String),
}

// Username - the unique account identity. Case-sensitive: "Alice" and
// "alice" are distinct accounts, so no normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
  const MAX_LENGTH: usize = 64;

  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();
    let trimmed = value.trim();

    if trimmed.is_empty() {
      return Err(ValueObjectError::EmptyUsername);
    }
    if trimmed.len() > Self::MAX_LENGTH {
      return Err(ValueObjectError::UsernameTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Username {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Username {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// Password - the plain secret, never stored. Not trimmed: whitespace is
// legitimate secret material.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  const MAX_LENGTH: usize = 128;

  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();

    if value.is_empty() {
      return Err(ValueObjectError::EmptyPassword);
    }
    if value.len() > Self::MAX_LENGTH {
      return Err(ValueObjectError::PasswordTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// Role - fixed at registration, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  Borrower,
}

impl Role {
  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Admin => "admin",
      Role::Borrower => "borrower",
    }
  }
}

impl FromStr for Role {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "admin" => Ok(Role::Admin),
      "borrower" => Ok(Role::Borrower),
      other => Err(ValueObjectError::UnknownRole(other.to_string())),
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// Account status. Borrowers start Pending and only an approved admin moves
// them to Approved; rejection deletes the account outright, so there is no
// Rejected state here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
  Pending,
  Approved,
}

impl AccountStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      AccountStatus::Pending => "pending",
      AccountStatus::Approved => "approved",
    }
  }

  pub fn is_approved(&self) -> bool {
    matches!(self, AccountStatus::Approved)
  }
}

impl FromStr for AccountStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(AccountStatus::Pending),
      "approved" => Ok(AccountStatus::Approved),
      other => Err(ValueObjectError::UnknownStatus(other.to_string())),
    }
  }
}

impl fmt::Display for AccountStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_username_validation() {
    assert!(Username::new("alice").is_ok());
    assert!(Username::new("  alice  ").is_ok());

    assert!(matches!(
      Username::new(""),
      Err(ValueObjectError::EmptyUsername)
    ));
    assert!(matches!(
      Username::new("   "),
      Err(ValueObjectError::EmptyUsername)
    ));
    assert!(matches!(
      Username::new("a".repeat(65)),
      Err(ValueObjectError::UsernameTooLong { .. })
    ));
  }

  #[test]
  fn test_username_is_case_sensitive() {
    let upper = Username::new("Alice").unwrap();
    let lower = Username::new("alice").unwrap();

    assert_eq!(upper.as_str(), "Alice");
    assert_ne!(upper, lower);
  }

  #[test]
  fn test_username_trims_surrounding_whitespace() {
    let username = Username::new("  bob  ").unwrap();
    assert_eq!(username.as_str(), "bob");
  }

  #[test]
  fn test_password_validation() {
    // Short passwords are allowed; the legacy data set contains them.
    assert!(Password::new("pw1").is_ok());

    assert!(matches!(
      Password::new(""),
      Err(ValueObjectError::EmptyPassword)
    ));
    assert!(matches!(
      Password::new("a".repeat(129)),
      Err(ValueObjectError::PasswordTooLong { .. })
    ));
  }

  #[test]
  fn test_password_is_not_trimmed() {
    let password = Password::new(" secret ").unwrap();
    assert_eq!(password.as_str(), " secret ");
  }

  #[test]
  fn test_password_debug_does_not_leak() {
    let password = Password::new("supersecret").unwrap();
    assert_eq!(format!("{:?}", password), "Password(***)");
    assert_eq!(password.to_string(), "***");
  }

  #[test]
  fn test_role_round_trip() {
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("borrower".parse::<Role>().unwrap(), Role::Borrower);
    assert_eq!(Role::Admin.as_str(), "admin");
    assert!("manager".parse::<Role>().is_err());
  }

  #[test]
  fn test_status_round_trip() {
    assert_eq!(
      "pending".parse::<AccountStatus>().unwrap(),
      AccountStatus::Pending
    );
    assert_eq!(
      "approved".parse::<AccountStatus>().unwrap(),
      AccountStatus::Approved
    );
    assert!(AccountStatus::Approved.is_approved());
    assert!(!AccountStatus::Pending.is_approved());
    assert!("rejected".parse::<AccountStatus>().is_err());
  }
}
