//! HS256 bearer tokens for the admin mutation gate.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

pub const ALGORITHM: &str = "HS256";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin username.
    pub sub: String,
    pub exp: i64,
}

pub fn issue_token(
    secret: &str,
    username: &str,
    expiry_minutes: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = Utc::now() + Duration::minutes(expiry_minutes);
    let claims = Claims {
        sub: username.to_string(),
        exp: exp.timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verify a bearer token and return its subject. Fails closed: any decode
/// error, signature mismatch or past expiry is a rejection.
pub fn verify_token(
    secret: &str,
    token: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;
    Ok(data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JWT_SECRET: &str = "test_secret_key_for_testing_only";

    #[test]
    fn test_issue_and_verify_token() {
        let token = issue_token(JWT_SECRET, "oia_admin", 60)
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let subject =
            verify_token(JWT_SECRET, &token).expect("Failed to verify token");
        assert_eq!(subject, "oia_admin");
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = Utc::now();
        let claims = Claims {
            sub: "oia_admin".to_string(),
            // Well past the default validation leeway.
            exp: (now - Duration::seconds(600)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(JWT_SECRET.as_ref()),
        )
        .unwrap();

        assert!(verify_token(JWT_SECRET, &token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(JWT_SECRET, "oia_admin", 60).unwrap();
        assert!(verify_token("a-different-secret", &token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_token(JWT_SECRET, "not.a.token").is_err());
        assert!(verify_token(JWT_SECRET, "").is_err());
    }
}
