use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use super::Claims;
use crate::errors::AppError;

/// A signed token together with its expiry boundary.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Single-slot store for the one live provider token.
///
/// Concurrent callers may race past the expiry check and each sign a
/// replacement; every signed token is independently valid and the last
/// write wins, so the race wastes a signature at worst. The lock is never
/// held across an await point.
#[derive(Default)]
pub struct TokenStore {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenStore {
    pub fn get(&self) -> Option<CachedToken> {
        self.slot.lock().expect("token store poisoned").clone()
    }

    pub fn set(&self, token: CachedToken) {
        *self.slot.lock().expect("token store poisoned") = Some(token);
    }
}

/// Signs and caches the time-limited token the video provider expects.
pub struct TokenManager {
    access_key: String,
    secret_key: String,
    ttl: Duration,
    refresh_margin: Duration,
}

impl TokenManager {
    pub fn new(access_key: String, secret_key: String) -> Self {
        Self {
            access_key,
            secret_key,
            ttl: Duration::minutes(30),
            refresh_margin: Duration::seconds(60),
        }
    }

    /// Returns the cached token while it is comfortably unexpired,
    /// otherwise signs a replacement and stores it.
    ///
    /// The refresh margin treats a token as expired slightly before its
    /// literal boundary so an outbound call cannot carry a token that
    /// lapses mid-flight.
    pub fn get_valid_token(&self, store: &TokenStore) -> Result<String, AppError> {
        let now = Utc::now();

        if let Some(cached) = store.get() {
            if cached.expires_at - self.refresh_margin > now {
                return Ok(cached.token);
            }
        }

        self.issue(store, now)
    }

    fn issue(&self, store: &TokenStore, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now + self.ttl;
        let claims = Claims {
            iss: self.access_key.clone(),
            exp: expires_at.timestamp(),
            nbf: (now - Duration::seconds(5)).timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_key.as_bytes()),
        )
        .map_err(|e| AppError::Credential(format!("token signing failed: {}", e)))?;

        store.set(CachedToken {
            token: token.clone(),
            expires_at,
        });

        Ok(token)
    }
}
