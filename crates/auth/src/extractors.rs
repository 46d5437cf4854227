//! Axum extractor for authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, validate_token};

/// Authenticated user extractor.
///
/// Validates the bearer token and yields the caller's identity. Claims are
/// self-contained; no database lookup happens here.
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = validate_token(&token, &config)?;

        Ok(AuthUser(AuthContext::new(claims.user_id, claims.email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use uuid::Uuid;

    #[derive(Clone)]
    struct TestState {
        auth_config: AuthConfig,
    }

    impl FromRef<TestState> for AuthConfig {
        fn from_ref(state: &TestState) -> Self {
            state.auth_config.clone()
        }
    }

    fn test_state() -> TestState {
        TestState {
            auth_config: AuthConfig {
                jwt_secret: "extractor-test-secret".to_string(),
                subject: "chatline".to_string(),
                issuer: None,
                audience: None,
            },
        }
    }

    #[tokio::test]
    async fn test_extractor_accepts_valid_token() {
        let state = test_state();
        let user_id = Uuid::new_v4();
        let (token, _) =
            crate::jwt::issue_token(user_id, "ann@x.com", &state.auth_config).unwrap();

        let request = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let AuthUser(ctx) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(ctx.user_id, user_id);
        assert_eq!(ctx.email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_extractor_rejects_missing_header() {
        let state = test_state();
        let request = Request::builder().body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthorization)));
    }

    #[tokio::test]
    async fn test_extractor_rejects_bad_token() {
        let state = test_state();
        let request = Request::builder()
            .header(AUTHORIZATION, "Bearer not-a-real-token")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
