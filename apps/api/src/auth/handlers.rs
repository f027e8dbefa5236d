//! Axum route handlers for registration, login and account management.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::auth::extractor::CurrentUser;
use crate::auth::jwt;
use crate::errors::AppError;
use crate::models::user::{PublicUser, UserRow};
use crate::state::AppState;

const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetailsRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub data: PublicUser,
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::Validation(
            "Name cannot be more than 50 characters".to_string(),
        ));
    }
    let email = normalize_email(&req.email)?;
    if req.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("User already exists".to_string()));
    }

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;

    let user: UserRow = sqlx::query_as(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await?;

    let token = issue_token(&state, &user)?;
    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            success: true,
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = normalize_email(&req.email)?;
    if req.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    let user = user.ok_or_else(invalid_credentials)?;

    let matches = bcrypt::verify(&req.password, &user.password_hash)
        .map_err(|e| anyhow::anyhow!("Password verification failed: {e}"))?;
    if !matches {
        return Err(invalid_credentials());
    }

    let token = issue_token(&state, &user)?;
    Ok(Json(TokenResponse {
        success: true,
        token,
        user: PublicUser::from(&user),
    }))
}

/// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = fetch_user(&state, current).await?;
    Ok(Json(UserResponse {
        success: true,
        data: PublicUser::from(&user),
    }))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; invalidation is the client discarding its copy.
/// This endpoint exists so the client has something to await.
pub async fn handle_logout(_current: CurrentUser) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {},
        "message": "Logged out successfully"
    }))
}

/// PUT /api/auth/updatedetails
pub async fn handle_update_details(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<UpdateDetailsRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::Validation(
            "Name cannot be more than 50 characters".to_string(),
        ));
    }
    let email = normalize_email(&req.email)?;

    let taken: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1 AND id <> $2")
        .bind(&email)
        .bind(current.id)
        .fetch_optional(&state.db)
        .await?;
    if taken.is_some() {
        return Err(AppError::Validation("Email already in use".to_string()));
    }

    let user: UserRow =
        sqlx::query_as("UPDATE users SET name = $1, email = $2 WHERE id = $3 RETURNING *")
            .bind(name)
            .bind(&email)
            .bind(current.id)
            .fetch_one(&state.db)
            .await?;

    Ok(Json(UserResponse {
        success: true,
        data: PublicUser::from(&user),
    }))
}

/// PUT /api/auth/updatepassword
pub async fn handle_update_password(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if req.current_password.is_empty() || req.new_password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    let user = fetch_user(&state, current).await?;
    let matches = bcrypt::verify(&req.current_password, &user.password_hash)
        .map_err(|e| anyhow::anyhow!("Password verification failed: {e}"))?;
    if !matches {
        return Err(AppError::Unauthorized("Password is incorrect".to_string()));
    }

    let password_hash = bcrypt::hash(&req.new_password, bcrypt::DEFAULT_COST)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;
    let user: UserRow =
        sqlx::query_as("UPDATE users SET password_hash = $1 WHERE id = $2 RETURNING *")
            .bind(&password_hash)
            .bind(user.id)
            .fetch_one(&state.db)
            .await?;

    let token = issue_token(&state, &user)?;
    Ok(Json(TokenResponse {
        success: true,
        token,
        user: PublicUser::from(&user),
    }))
}

async fn fetch_user(state: &AppState, current: CurrentUser) -> Result<UserRow, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(current.id)
        .fetch_optional(&state.db)
        .await?;
    user.ok_or_else(|| AppError::Unauthorized("Not authorized to access this route".to_string()))
}

fn issue_token(state: &AppState, user: &UserRow) -> Result<String, AppError> {
    jwt::issue_token(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_expiry_days,
    )
    .map_err(|e| anyhow::anyhow!("Token issuing failed: {e}").into())
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".to_string())
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    // Light structural check; real deliverability is the mail server's problem
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });
    if !valid {
        return Err(AppError::Validation(
            "Please provide a valid email".to_string(),
        ));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_and_trims() {
        assert_eq!(
            normalize_email("  Jane@Example.COM ").unwrap(),
            "jane@example.com"
        );
    }

    #[test]
    fn test_normalize_email_rejects_missing_at() {
        assert!(normalize_email("janeexample.com").is_err());
    }

    #[test]
    fn test_normalize_email_rejects_empty() {
        assert!(normalize_email("   ").is_err());
    }

    #[test]
    fn test_normalize_email_rejects_bad_domain() {
        assert!(normalize_email("jane@com").is_err());
        assert!(normalize_email("jane@.com").is_err());
        assert!(normalize_email("jane@com.").is_err());
    }
}
