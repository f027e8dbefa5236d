use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted portfolio document.
///
/// The canonical document shape (see `portfolio::models::ServerPortfolio`)
/// lives in the JSONB `data` column; `slug` and `is_public` are real columns
/// so uniqueness and the public-read filter are enforced by the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub data: Value,
    pub slug: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
