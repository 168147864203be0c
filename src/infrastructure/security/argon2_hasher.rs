use argon2::password_hash::SaltString;
use argon2::{
  Argon2,
  password_hash::{PasswordHash as Argon2PasswordHash, PasswordHasher as _, PasswordVerifier},
};
use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::Password;

/// Scheme tag carried by every digest this hasher produces. Stored values
/// without it are historical plaintext passwords.
const SCHEME_TAG: &str = "$argon2";

/// Argon2id credential hasher.
///
/// Uses the argon2 crate defaults (Argon2id v19, 19 MiB memory, 2
/// iterations, 1 lane) with a random per-digest salt. Stateless: callers
/// persist the digests it returns.
pub struct Argon2CredentialHasher {
  argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
  pub fn new() -> Self {
    Self {
      argon2: Argon2::default(),
    }
  }
}

impl Default for Argon2CredentialHasher {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl PasswordHasher for Argon2CredentialHasher {
  async fn hash(&self, password: &Password) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| AuthError::Hash(HashError::HashingFailed(e.to_string())))?;

    Ok(hash.to_string())
  }

  /// Verification never errors: an unparseable digest is simply not a
  /// match. argon2's verify_password compares in constant time.
  async fn verify(&self, password: &Password, digest: &str) -> bool {
    let Ok(parsed_hash) = Argon2PasswordHash::new(digest) else {
      return false;
    };

    self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
      .is_ok()
  }

  fn is_legacy_plaintext(&self, digest: &str) -> bool {
    !digest.starts_with(SCHEME_TAG)
  }

  /// Compares SHA-256 digests of both sides so the comparison runs over
  /// fixed-length values rather than the raw secrets.
  fn verify_legacy_plaintext(&self, password: &Password, stored: &str) -> bool {
    let candidate = Sha256::digest(password.as_str().as_bytes());
    let expected = Sha256::digest(stored.as_bytes());

    candidate == expected
  }
}
