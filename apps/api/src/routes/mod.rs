pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::portfolio::handlers as portfolios;
use crate::resume::handlers as resume;
use crate::resume::upload::UPLOAD_BODY_LIMIT;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handle_register))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/me", get(auth::handle_me))
        .route("/api/auth/logout", post(auth::handle_logout))
        .route("/api/auth/updatedetails", put(auth::handle_update_details))
        .route("/api/auth/updatepassword", put(auth::handle_update_password))
        // Portfolios
        .route(
            "/api/portfolios",
            get(portfolios::handle_list).post(portfolios::handle_create),
        )
        .route(
            "/api/portfolios/:id",
            get(portfolios::handle_get)
                .put(portfolios::handle_update)
                .delete(portfolios::handle_delete),
        )
        .route(
            "/api/portfolios/public/:slug",
            get(portfolios::handle_get_public),
        )
        .route(
            "/api/portfolios/:id/visibility",
            put(portfolios::handle_toggle_visibility),
        )
        // Resume parsing
        .route("/api/resume/parse", post(resume::handle_parse_upload))
        .route("/api/resume/parse-text", post(resume::handle_parse_text))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .with_state(state)
}
