//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.
//!
//! Nothing except the bind address is mandatory: without `DATABASE_URL` the
//! listing endpoints answer 503, without storage credentials uploads and the
//! review queue do, and without admin credentials login does.

use admin::{AdminConfig, AdminGateState, admin_gate, admin_router};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use board::{BoardConfig, PgBoardRepository, board_router};
use platform::config::{env_flag, env_or, env_trimmed};
use platform::storage::{StorageConfig, SupabaseStorage};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,board=info,admin=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection (lazy: the first query connects)
    let repo = match env_trimmed("DATABASE_URL") {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect_lazy(&database_url)?;

            if env_flag("RUN_MIGRATIONS").unwrap_or(false) {
                sqlx::migrate!("../../../database/migrations")
                    .run(&pool)
                    .await?;
                tracing::info!("Migrations completed");
            }

            Some(PgBoardRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; listing endpoints will answer 503");
            None
        }
    };

    // Blob storage
    let storage_config =
        StorageConfig::from_parts(env_trimmed("SUPABASE_URL"), env_trimmed("SUPABASE_SERVICE_ROLE_KEY"));
    if storage_config.is_none() {
        tracing::warn!("Storage is not configured; uploads and the review queue will answer 503");
    }

    // Admin configuration
    let admin_config = AdminConfig {
        account: env_trimmed("ADMIN_PHONE"),
        password: env_trimmed("ADMIN_PASSWORD"),
        cookie_secure: env_flag("COOKIE_SECURE").unwrap_or(!cfg!(debug_assertions)),
        ..AdminConfig::default()
    }
    .with_secret_text(env_trimmed("ADMIN_SESSION_SECRET").as_deref());

    if admin_config.credentials().is_none() {
        tracing::warn!("ADMIN_PHONE / ADMIN_PASSWORD not set; admin login is disabled");
    }
    if admin_config.session_secret.is_none() {
        tracing::warn!("ADMIN_SESSION_SECRET not set; the admin area is closed");
    }

    // CORS configuration
    let frontend_origins = env_or(
        "FRONTEND_ORIGINS",
        "http://localhost:3000,http://127.0.0.1:3000",
    );

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ]))
        .allow_credentials(true);

    // Build router; the gate sees full paths, so it wraps the whole app
    let app = Router::new()
        .nest(
            "/api/admin",
            admin_router(
                repo.clone(),
                storage_config.clone().map(SupabaseStorage::new),
                admin_config.clone(),
            ),
        )
        .nest(
            "/api",
            board_router(
                repo,
                storage_config.map(SupabaseStorage::new),
                BoardConfig::default(),
            ),
        )
        .layer(middleware::from_fn_with_state(
            AdminGateState::new(admin_config),
            admin_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env_or("BIND_ADDR", "0.0.0.0:31113").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
