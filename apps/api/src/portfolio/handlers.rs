//! Axum route handlers for the portfolio CRUD and sharing API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::extractor::CurrentUser;
use crate::errors::AppError;
use crate::portfolio::models::{PortfolioDto, ServerPortfolio};
use crate::portfolio::store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<PortfolioDto>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub success: bool,
    pub data: PortfolioDto,
}

/// GET /api/portfolios
pub async fn handle_list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ListResponse>, AppError> {
    let rows = store::list_for_user(&state.db, user.id).await?;
    let data = rows
        .into_iter()
        .map(PortfolioDto::from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(ListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// POST /api/portfolios
pub async fn handle_create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(document): Json<ServerPortfolio>,
) -> Result<(StatusCode, Json<PortfolioResponse>), AppError> {
    let row = store::insert(&state.db, user.id, &document).await?;
    let row = store::ensure_slug(&state.db, row, &document).await?;
    Ok((
        StatusCode::CREATED,
        Json(PortfolioResponse {
            success: true,
            data: PortfolioDto::from_row(row)?,
        }),
    ))
}

/// GET /api/portfolios/:id
pub async fn handle_get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let row = fetch_owned(&state, id, user.id, "access").await?;
    Ok(Json(PortfolioResponse {
        success: true,
        data: PortfolioDto::from_row(row)?,
    }))
}

/// PUT /api/portfolios/:id
///
/// Replaces the stored document wholesale (last write wins; there is no
/// document versioning). Assigns a slug only if the row has none yet.
pub async fn handle_update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(document): Json<ServerPortfolio>,
) -> Result<Json<PortfolioResponse>, AppError> {
    fetch_owned(&state, id, user.id, "update").await?;
    let row = store::update_document(&state.db, id, &document).await?;
    let row = store::ensure_slug(&state.db, row, &document).await?;
    Ok(Json(PortfolioResponse {
        success: true,
        data: PortfolioDto::from_row(row)?,
    }))
}

/// DELETE /api/portfolios/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    fetch_owned(&state, id, user.id, "delete").await?;
    store::delete(&state.db, id).await?;
    Ok(Json(json!({
        "success": true,
        "data": {},
        "message": "Portfolio deleted successfully"
    })))
}

/// GET /api/portfolios/public/:slug
///
/// Unauthenticated. A private portfolio is indistinguishable from a
/// missing one.
pub async fn handle_get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let row = store::find_public_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Portfolio not found".to_string()))?;
    Ok(Json(PortfolioResponse {
        success: true,
        data: PortfolioDto::from_row(row)?,
    }))
}

/// PUT /api/portfolios/:id/visibility
pub async fn handle_toggle_visibility(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let row = fetch_owned(&state, id, user.id, "update").await?;
    let row = store::set_visibility(&state.db, id, !row.is_public).await?;
    let document: ServerPortfolio = serde_json::from_value(row.data.clone())
        .map_err(|e| anyhow::anyhow!("Corrupt portfolio document {}: {e}", row.id))?;
    let row = store::ensure_slug(&state.db, row, &document).await?;
    Ok(Json(PortfolioResponse {
        success: true,
        data: PortfolioDto::from_row(row)?,
    }))
}

/// Fetches a portfolio and verifies ownership. A portfolio owned by
/// someone else is an authorization error, not a not-found.
async fn fetch_owned(
    state: &AppState,
    id: Uuid,
    user_id: Uuid,
    action: &str,
) -> Result<crate::models::portfolio::PortfolioRow, AppError> {
    let row = store::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Portfolio not found".to_string()))?;
    if row.user_id != user_id {
        return Err(AppError::Unauthorized(format!(
            "Not authorized to {action} this portfolio"
        )));
    }
    Ok(row)
}
