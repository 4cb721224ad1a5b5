use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

/// Session token claims. Everything a request needs to act as a user is
/// carried here; nothing is persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: Uuid, email: String) -> Self {
        let now = Utc::now();
        let ttl_hours = config::config().security.session_ttl_hours;
        let exp = (now + Duration::hours(ttl_hours as i64)).timestamp();

        Self {
            sub,
            email,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

/// Sign a session token under the process-wide secret.
pub fn issue(claims: &Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    sign_with_secret(claims, secret)
}

/// Verify signature and expiry, returning the decoded claims.
///
/// Any failure (bad signature, malformed token, expired) collapses to
/// `None`; callers get a single invalid signal with no internal detail.
pub fn verify(token: &str) -> Option<Claims> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return None;
    }

    verify_with_secret(token, secret)
}

fn sign_with_secret(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

fn verify_with_secret(token: &str, secret: &str) -> Option<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    // Default leeway is 60s; the validity window is exact.
    validation.leeway = 0;

    decode::<Claims>(token, &decoding_key, &validation)
        .ok()
        .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn claims_with_ttl(ttl_secs: i64) -> Claims {
        let now = Utc::now();
        Claims {
            sub: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            iat: now.timestamp(),
        }
    }

    #[test]
    fn round_trip_preserves_subject_and_email() {
        let claims = claims_with_ttl(60 * 60 * 24);
        let token = sign_with_secret(&claims, SECRET).unwrap();

        let decoded = verify_with_secret(&token, SECRET).expect("token should verify");
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.email, claims.email);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn verify_near_end_of_window() {
        // Still inside the window by one minute
        let claims = claims_with_ttl(60);
        let token = sign_with_secret(&claims, SECRET).unwrap();
        assert!(verify_with_secret(&token, SECRET).is_some());
    }

    #[test]
    fn rejects_expired_token() {
        let claims = claims_with_ttl(-1);
        let token = sign_with_secret(&claims, SECRET).unwrap();
        assert!(verify_with_secret(&token, SECRET).is_none());
    }

    #[test]
    fn rejects_wrong_secret() {
        let claims = claims_with_ttl(60 * 60);
        let token = sign_with_secret(&claims, SECRET).unwrap();
        assert!(verify_with_secret(&token, "other-secret").is_none());
    }

    #[test]
    fn rejects_tampered_payload() {
        let claims = claims_with_ttl(60 * 60);
        let token = sign_with_secret(&claims, SECRET).unwrap();

        // Flip a character in the payload segment
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(verify_with_secret(&tampered, SECRET).is_none());
    }

    #[test]
    fn rejects_malformed_token() {
        assert!(verify_with_secret("not-a-token", SECRET).is_none());
        assert!(verify_with_secret("", SECRET).is_none());
    }
}
