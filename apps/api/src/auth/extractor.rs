//! Bearer-token extractor for protected routes.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::auth::jwt;
use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated caller, resolved from the `Authorization: Bearer`
/// header. Use as a handler argument to require authentication.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;
        if token.is_empty() {
            return Err(unauthorized());
        }

        let claims = jwt::verify_token(token, &state.config.jwt_secret).map_err(|e| {
            tracing::warn!("JWT verification failed: {e}");
            unauthorized()
        })?;

        Ok(CurrentUser { id: claims.sub })
    }
}

fn unauthorized() -> AppError {
    AppError::Unauthorized("Not authorized to access this route".to_string())
}
