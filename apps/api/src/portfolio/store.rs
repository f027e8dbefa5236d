//! Persistence operations for portfolio documents.
//!
//! Slug assignment happens here, at save time, and only for rows that have
//! no slug yet. Uniqueness is enforced by the `portfolios.slug` unique
//! constraint: each candidate is written directly and a 23505 conflict
//! advances to the next counter. Once a slug is set it is never changed.

use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::portfolio::PortfolioRow;
use crate::portfolio::models::ServerPortfolio;
use crate::portfolio::slug;

const MAX_SLUG_ATTEMPTS: u32 = 50;

pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<PortfolioRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM portfolios WHERE user_id = $1 ORDER BY created_at")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PortfolioRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM portfolios WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// The public read path: only matches when the document is public.
pub async fn find_public_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<PortfolioRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM portfolios WHERE slug = $1 AND is_public = TRUE")
        .bind(slug)
        .fetch_optional(pool)
        .await
}

pub async fn insert(
    pool: &PgPool,
    user_id: Uuid,
    document: &ServerPortfolio,
) -> Result<PortfolioRow, sqlx::Error> {
    let data = serde_json::to_value(document).unwrap_or(Value::Null);
    sqlx::query_as(
        "INSERT INTO portfolios (user_id, data) VALUES ($1, $2) RETURNING *",
    )
    .bind(user_id)
    .bind(data)
    .fetch_one(pool)
    .await
}

pub async fn update_document(
    pool: &PgPool,
    id: Uuid,
    document: &ServerPortfolio,
) -> Result<PortfolioRow, sqlx::Error> {
    let data = serde_json::to_value(document).unwrap_or(Value::Null);
    sqlx::query_as(
        "UPDATE portfolios SET data = $1, updated_at = now() WHERE id = $2 RETURNING *",
    )
    .bind(data)
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM portfolios WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_visibility(
    pool: &PgPool,
    id: Uuid,
    is_public: bool,
) -> Result<PortfolioRow, sqlx::Error> {
    sqlx::query_as(
        "UPDATE portfolios SET is_public = $1, updated_at = now() WHERE id = $2 RETURNING *",
    )
    .bind(is_public)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Assigns a slug to a freshly saved row if it does not have one yet.
///
/// Idempotent: a row that already carries a non-empty slug is returned
/// untouched. A document with no personal name gets a time-derived random
/// slug so it stays addressable; otherwise candidates `base`, `base-1`,
/// `base-2`, ... are written until the unique constraint stops objecting.
pub async fn ensure_slug(
    pool: &PgPool,
    row: PortfolioRow,
    document: &ServerPortfolio,
) -> Result<PortfolioRow, sqlx::Error> {
    if row.slug.as_deref().is_some_and(|s| !s.is_empty()) {
        return Ok(row);
    }

    if document.personal_info.full_name.trim().is_empty() {
        return assign_fallback_slug(pool, row.id).await;
    }

    let base = slug::base_slug(&document.personal_info.full_name);
    for attempt in 0..MAX_SLUG_ATTEMPTS {
        let candidate = slug::candidate(&base, attempt);
        match try_set_slug(pool, row.id, &candidate).await {
            Ok(updated) => {
                info!("Assigned slug '{candidate}' to portfolio {}", row.id);
                return Ok(updated);
            }
            Err(e) if is_unique_violation(&e) => continue,
            Err(e) => return Err(e),
        }
    }

    // Exhausted the counter without a free candidate; fall back to a
    // time-derived slug so the document remains addressable.
    assign_fallback_slug(pool, row.id).await
}

async fn assign_fallback_slug(pool: &PgPool, id: Uuid) -> Result<PortfolioRow, sqlx::Error> {
    loop {
        let candidate = slug::fallback_slug(slug::now_millis());
        match try_set_slug(pool, id, &candidate).await {
            Ok(updated) => {
                info!("Assigned fallback slug '{candidate}' to portfolio {id}");
                return Ok(updated);
            }
            Err(e) if is_unique_violation(&e) => continue,
            Err(e) => return Err(e),
        }
    }
}

async fn try_set_slug(pool: &PgPool, id: Uuid, slug: &str) -> Result<PortfolioRow, sqlx::Error> {
    sqlx::query_as("UPDATE portfolios SET slug = $1, updated_at = now() WHERE id = $2 RETURNING *")
        .bind(slug)
        .bind(id)
        .fetch_one(pool)
        .await
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}
