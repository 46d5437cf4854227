//! JWT issuance, validation, and token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Issued tokens are valid for 3 hours.
pub const TOKEN_TTL_SECS: u64 = 3 * 60 * 60;

/// Issue a signed bearer token for an authenticated user.
///
/// Returns the encoded token together with its expiry timestamp.
pub fn issue_token(
    user_id: Uuid,
    email: &str,
    config: &AuthConfig,
) -> Result<(String, chrono::DateTime<chrono::Utc>), AuthError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(TOKEN_TTL_SECS as i64);

    let claims = Claims {
        sub: config.subject.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp() as u64,
        exp: expires_at.timestamp() as u64,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        user_id,
        email: email.to_string(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode JWT");
        AuthError::TokenIssueFailed
    })?;

    Ok((token, expires_at))
}

/// Validate a bearer token and return its claims.
pub fn validate_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    if let Some(aud) = &config.audience {
        validation.set_audience(&[aud]);
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
