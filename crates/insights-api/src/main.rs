//! insights-api - HTTP API server binary.

use std::time::Duration;

use anyhow::Context;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insights_api::telemetry::{self, MakeRequestUuidV7};
use insights_api::{router, AppState};
use insights_db::{Database, PoolConfig};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("insights_api=info,insights_db=info,tower_http=info")
    });
    let registry = tracing_subscriber::registry().with(env_filter);

    match std::env::var("INSIGHTS_LOG_FORMAT").as_deref() {
        Ok("json") => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut pool_config = PoolConfig::default();
    if let Ok(secs) = std::env::var("INSIGHTS_STATEMENT_TIMEOUT_SECS") {
        let secs: u64 = secs
            .parse()
            .context("INSIGHTS_STATEMENT_TIMEOUT_SECS must be an integer")?;
        pool_config = pool_config.statement_timeout(Duration::from_secs(secs));
    }

    let db = Database::connect_with_config(&database_url, pool_config).await?;
    db.migrate().await?;
    info!(subsystem = "api", op = "migrate", "Database schema is up to date");

    let cors_origin = std::env::var("INSIGHTS_CORS_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(
            cors_origin
                .parse::<HeaderValue>()
                .context("INSIGHTS_CORS_ORIGIN is not a valid origin")?,
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http().make_span_with(
        |request: &axum::http::Request<axum::body::Body>| telemetry::request_span(request),
    );

    let app = router(AppState::new(db))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    let bind_addr =
        std::env::var("INSIGHTS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!(
        subsystem = "api",
        op = "startup",
        addr = %bind_addr,
        cors_origin = %cors_origin,
        "insights-api listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
