pub mod token_manager;

pub use token_manager::{CachedToken, TokenManager, TokenStore};

use serde::{Deserialize, Serialize};

/// Claims carried by the provider-facing signed token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Access-key identifier of the issuer.
    pub iss: String,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Not-before, backdated slightly against clock skew.
    pub nbf: i64,
}
