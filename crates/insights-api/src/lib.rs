//! insights-api - HTTP API for the insights service.
//!
//! The library exposes the router and its boundary modules so the HTTP
//! surface can be exercised in tests. The binary in `main.rs` wires
//! configuration, tracing, and middleware around [`router`].

pub mod auth;
pub mod error;
pub mod handlers;
pub mod services;
pub mod telemetry;

use axum::response::Json;
use axum::routing::{get, post, put};
use axum::Router;

use insights_db::Database;

use handlers::insights::{create_insight, delete_insight, list_insights, update_insight};
use handlers::sources::{create_source, delete_source, list_sources, update_source};
use handlers::users::{delete_user, get_user, register_user, update_user};
use services::{InsightService, SourceService, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub(crate) users: UserService,
    pub(crate) sources: SourceService,
    pub(crate) insights: InsightService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            users: UserService::new(db.clone()),
            sources: SourceService::new(db.clone()),
            insights: InsightService::new(db),
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the API router. Middleware (CORS, request IDs, tracing) is layered
/// on top by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/v1/users",
            post(register_user)
                .get(get_user)
                .put(update_user)
                .delete(delete_user),
        )
        .route("/api/v1/sources", get(list_sources).post(create_source))
        .route(
            "/api/v1/sources/:id",
            put(update_source).delete(delete_source),
        )
        .route("/api/v1/insights", get(list_insights).post(create_insight))
        .route(
            "/api/v1/insights/:id",
            put(update_insight).delete(delete_insight),
        )
        .with_state(state)
}
