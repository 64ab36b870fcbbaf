//! Authentication configuration.
//!
//! The signing secret, issuer, and token TTL are deployment-provided and
//! treated as opaque here.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Issuer claim embedded in every token.
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,
    /// Token TTL in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_issuer() -> String {
    "clinic-api".to_string()
}

fn default_token_ttl() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_defaults() {
        let config: AuthConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config.jwt_issuer, "clinic-api");
        assert_eq!(config.token_ttl_seconds, 1800);
    }
}
