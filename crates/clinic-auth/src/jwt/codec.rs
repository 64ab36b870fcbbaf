//! JWT creation, parsing and signature verification.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use clinic_core::config::AuthConfig;
use clinic_entity::user::RoleType;

use super::claims::Claims;
use super::error::TokenError;
use crate::principal::Principal;

/// Issues and inspects HS256-signed access tokens.
///
/// Parsing and signature verification are deliberately separate
/// operations: callers decide in which order to apply them, and an
/// unverified parse never grants access by itself.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Value of the `iss` claim stamped on every token.
    issuer: String,
    /// Token lifetime in seconds.
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("issuer", &self.issuer)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_parts(
            &config.jwt_secret,
            &config.jwt_issuer,
            config.token_ttl_seconds as i64,
        )
    }

    /// Creates a codec from raw parts.
    pub fn from_parts(secret: &str, issuer: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_string(),
            ttl_seconds,
        }
    }

    /// Issues a signed token for the given email and role, expiring
    /// `ttl_seconds` from now.
    pub fn issue(&self, email: &str, role: RoleType) -> Result<String, TokenError> {
        let exp = Utc::now().timestamp() + self.ttl_seconds;
        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            iss: self.issuer.clone(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Creation(e.to_string()))
    }

    /// Extracts the principal from a token WITHOUT verifying its
    /// signature or expiry. Must be paired with [`Self::verify_signature`]
    /// before the result is trusted.
    pub fn parse_principal(&self, token: &str) -> Result<Principal, TokenError> {
        let claims = self.decode_unverified(token)?;
        let role = claims
            .role
            .parse::<RoleType>()
            .map_err(|e| TokenError::Parse(e.message))?;

        Ok(Principal::new(claims.email, role))
    }

    /// Checks whether the token's signature matches this codec's secret.
    ///
    /// Returns `Ok(false)` for a well-formed token signed with a
    /// different key, and an error when the token is too malformed for
    /// verification to run at all.
    pub fn verify_signature(&self, token: &str) -> Result<bool, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        match decode::<serde_json::Value>(token, &self.decoding_key, &validation) {
            Ok(_) => Ok(true),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => Ok(false),
                _ => Err(TokenError::Verification(e.to_string())),
            },
        }
    }

    /// Seconds until the token expires. Negative when already expired.
    pub fn seconds_until_expiry(&self, token: &str) -> Result<i64, TokenError> {
        let claims = self.decode_unverified(token)?;
        Ok(claims.exp - Utc::now().timestamp())
    }

    /// Whether the token's expiry is still in the future.
    pub fn is_not_expired(&self, token: &str) -> Result<bool, TokenError> {
        Ok(self.seconds_until_expiry(token)? > 0)
    }

    /// Decodes the claims payload without signature or expiry checks.
    fn decode_unverified(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::from_parts("unit-test-secret", "clinic-api", 1800)
    }

    #[test]
    fn test_issue_and_parse_round_trip() {
        let codec = codec();
        let token = codec.issue("alice@example.com", RoleType::Admin).unwrap();

        let principal = codec.parse_principal(&token).unwrap();
        assert_eq!(principal.email, "alice@example.com");
        assert_eq!(principal.role, RoleType::Admin);
    }

    #[test]
    fn test_seconds_until_expiry_close_to_ttl() {
        let codec = codec();
        let token = codec.issue("alice@example.com", RoleType::User).unwrap();

        let remaining = codec.seconds_until_expiry(&token).unwrap();
        assert!(remaining > 1790 && remaining <= 1800, "got {remaining}");
        assert!(codec.is_not_expired(&token).unwrap());
    }

    #[test]
    fn test_expired_token_has_negative_remaining() {
        let expired = TokenCodec::from_parts("unit-test-secret", "clinic-api", -60);
        let token = expired.issue("alice@example.com", RoleType::User).unwrap();

        assert!(expired.seconds_until_expiry(&token).unwrap() < 0);
        assert!(!expired.is_not_expired(&token).unwrap());
        // Signature is still valid even though the token is expired.
        assert!(expired.verify_signature(&token).unwrap());
    }

    #[test]
    fn test_wrong_secret_fails_verification_cleanly() {
        let codec = codec();
        let other = TokenCodec::from_parts("a-different-secret", "clinic-api", 1800);
        let token = other.issue("alice@example.com", RoleType::User).unwrap();

        assert!(!codec.verify_signature(&token).unwrap());
        // The payload is still parseable without verification.
        let principal = codec.parse_principal(&token).unwrap();
        assert_eq!(principal.email, "alice@example.com");
    }

    #[test]
    fn test_garbage_token_is_a_verification_error() {
        let codec = codec();
        assert!(matches!(
            codec.verify_signature("not.a.token"),
            Err(TokenError::Verification(_))
        ));
        assert!(matches!(
            codec.parse_principal("not-even-close"),
            Err(TokenError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_role_claim_fails_to_parse() {
        let codec = codec();
        let claims = serde_json::json!({
            "sub": "alice@example.com",
            "email": "alice@example.com",
            "role": "SUPERUSER",
            "iss": "clinic-api",
            "exp": Utc::now().timestamp() + 600,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        assert!(codec.verify_signature(&token).unwrap());
        assert!(matches!(
            codec.parse_principal(&token),
            Err(TokenError::Parse(_))
        ));
    }
}
