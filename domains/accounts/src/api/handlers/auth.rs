//! Registration and login API handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use chatline_auth::{hash_password, issue_token, verify_password};
use chatline_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

/// Request for registering a new account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 100, message = "Email must be at most 100 characters"))]
    pub email: String,

    #[validate(length(min = 6, max = 100, message = "Password must be 6-100 characters"))]
    pub password: String,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User summary DTO (never exposes the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

/// Register a new account
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    if state.repos.users.find_by_email(&req.email).await?.is_some() {
        return Err(Error::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|_| Error::Internal("Failed to hash password".to_string()))?;

    let user = User::new(req.username, req.email, password_hash)?;
    let created = state.repos.users.create(&user).await?;

    tracing::info!(user_id = %created.id, "User registered");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Log in with email and password
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state.repos.users.find_by_email(&req.email).await?;

    // Same error for unknown email and bad password
    let user = match user {
        Some(user) if verify_password(&req.password, &user.password_hash) => user,
        _ => {
            return Err(Error::Authentication(
                "Invalid email or password".to_string(),
            ))
        }
    };

    let (token, expires_at) = issue_token(user.id, &user.email, &state.auth_config)
        .map_err(|_| Error::Internal("Failed to issue token".to_string()))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        token,
        expires_at,
        user: user.into(),
    }))
}
