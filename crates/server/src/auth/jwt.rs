use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{AppError, AuthUser};
use std::sync::OnceLock;

/// Used when `JWT_SECRET` is unset so the mock backend runs out of the box.
const DEV_SECRET: &str = "legal-office-dev-secret-change-me";

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Staff member id.
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token id so two logins in the same second get distinct tokens.
    pub jti: String,
}

/// SHA-256 of a raw token, hex encoded. Revoked tokens are kept by hash.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn jwt_secret() -> &'static str {
    static SECRET: OnceLock<String> = OnceLock::new();
    SECRET.get_or_init(|| {
        let _ = dotenvy::dotenv();
        match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_SECRET.to_string()
            }
        }
    })
}

/// Sign a token for `user` that expires `ttl_minutes` from now. A lifetime
/// that is not positive or overflows the clock is an internal error.
pub fn create_access_token(user: &AuthUser, ttl_minutes: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let expires = Some(ttl_minutes)
        .filter(|ttl| *ttl > 0)
        .and_then(Duration::try_minutes)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::internal(format!("token lifetime of {ttl_minutes} minutes is out of range"))
        })?;
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        iat: now.timestamp(),
        exp: expires.timestamp(),
        jti: uuid::Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("issuing token: {e}")))
}

pub fn validate_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::StaffRole;

    fn user() -> AuthUser {
        AuthUser {
            id: "emp-1".into(),
            name: "محمد العتيبي".into(),
            email: "admin@office.test".into(),
            role: StaffRole::Admin,
        }
    }

    #[test]
    fn create_and_validate_access_token() {
        let token = create_access_token(&user(), 30).unwrap();
        let claims = validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, "emp-1");
        assert_eq!(claims.email, "admin@office.test");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn unusable_lifetimes_are_errors() {
        for ttl in [0, -5, i64::MAX] {
            let err = create_access_token(&user(), ttl).unwrap_err();
            assert_eq!(err.kind, shared_types::AppErrorKind::InternalError, "ttl {ttl}");
        }
    }

    #[test]
    fn expired_token_rejected() {
        let now = Utc::now();
        let claims = Claims {
            sub: "emp-1".into(),
            email: "admin@office.test".into(),
            role: "admin".into(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            jti: "x".into(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt_secret().as_bytes()),
        )
        .unwrap();
        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn invalid_token_rejected() {
        assert!(validate_access_token("not.a.valid.jwt").is_err());
        assert!(validate_access_token("").is_err());
    }

    #[test]
    fn tokens_are_unique_per_login() {
        let a = create_access_token(&user(), 30).unwrap();
        let b = create_access_token(&user(), 30).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn hash_token_produces_consistent_hex() {
        let hash1 = hash_token("eyJhbGciOiJIUzI1NiJ9.payload.sig");
        let hash2 = hash_token("eyJhbGciOiJIUzI1NiJ9.payload.sig");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert_ne!(hash1, hash_token("other"));
    }
}
