use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::auth::entities::SessionData;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::SessionStore;

const TOKEN_BYTES: usize = 32;

struct Entry {
  data: SessionData,
  expires_at: DateTime<Utc>,
}

/// In-memory session store.
///
/// Sessions are ephemeral by design: they live for the configured TTL at
/// most and die with the process. Entries are keyed by the SHA-256 hash of
/// the token, so the raw token only ever exists in the caller's cookie.
pub struct InMemorySessionStore {
  entries: RwLock<HashMap<String, Entry>>,
  ttl: Duration,
}

impl InMemorySessionStore {
  pub fn new(ttl: Duration) -> Self {
    Self {
      entries: RwLock::new(HashMap::new()),
      ttl,
    }
  }

  fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
  }

  fn token_key(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
  }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
  async fn establish(&self, data: SessionData) -> Result<String, AuthError> {
    let token = Self::generate_token();
    let entry = Entry {
      data,
      expires_at: Utc::now() + self.ttl,
    };

    self.entries.write().await.insert(Self::token_key(&token), entry);

    Ok(token)
  }

  async fn get(&self, token: &str) -> Result<Option<SessionData>, AuthError> {
    let key = Self::token_key(token);

    {
      let entries = self.entries.read().await;
      match entries.get(&key) {
        Some(entry) if entry.expires_at > Utc::now() => {
          return Ok(Some(entry.data.clone()));
        }
        Some(_expired) => {}
        None => return Ok(None),
      }
    }

    // Expired entry: drop it before reporting the caller as anonymous.
    self.entries.write().await.remove(&key);
    Ok(None)
  }

  async fn clear(&self, token: &str) -> Result<(), AuthError> {
    self.entries.write().await.remove(&Self::token_key(token));
    Ok(())
  }
}
