//! The Paradox Wheel engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::{HeaderName, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paradox_wheel_engine::api::{self, auth::ADMIN_PASSWORD_HEADER};
use paradox_wheel_engine::app::{App, Repositories};
use paradox_wheel_engine::config::{load_dotenv_from_repo_root, AppConfig};
use paradox_wheel_engine::infrastructure::{clock::SystemClock, ports::ClockPort, sqlite};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paradox_wheel_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting The Paradox Wheel engine");

    let config = AppConfig::from_env()?;
    if !config.admin.is_enabled() {
        tracing::warn!("ADMIN_PASSWORD_SHA256 is not set, admin writes are disabled");
    }

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

    tracing::info!(path = %config.database_path, "Opening SQLite database");
    let pool = sqlite::connect(&config.database_path).await?;
    sqlite::ensure_schema(&pool).await?;

    let repositories = Repositories::sqlite(pool, clock.clone());
    let app = Arc::new(App::new(repositories, clock, config.admin.clone()));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(&config.cors_allowed_origins) {
        router = router.layer(cors);
    }

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn build_cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.is_empty() {
        return None;
    }

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // Admin writes carry the password header, which triggers a preflight.
        .allow_headers([HeaderName::from_static(ADMIN_PASSWORD_HEADER), CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
