//! Board Router
//!
//! Paths are relative to the `/api` prefix the binary nests this router under.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use platform::identity::IdentityProvider;
use platform::storage::{BlobStore, SupabaseStorage};
use std::sync::Arc;

use crate::application::config::BoardConfig;
use crate::domain::repository::{DemandRepository, TutorRepository};
use crate::infra::postgres::PgBoardRepository;
use crate::presentation::handlers::{self, BoardAppState};

/// Create the Board router with the PostgreSQL repository and Supabase storage
pub fn board_router(
    repo: Option<PgBoardRepository>,
    store: Option<SupabaseStorage>,
    config: BoardConfig,
) -> Router {
    board_router_generic(repo, store, config)
}

/// Create a generic Board router for any repository and blob store
///
/// The store also resolves uploaders' access tokens.
pub fn board_router_generic<R, S>(repo: Option<R>, store: Option<S>, config: BoardConfig) -> Router
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + IdentityProvider + Send + Sync + 'static,
{
    // Two files plus form overhead
    let upload_limit = config.max_upload_bytes * 2 + 64 * 1024;

    let state = BoardAppState {
        repo: repo.map(Arc::new),
        store: store.map(Arc::new),
        config: Arc::new(config),
    };

    Router::new()
        .route("/board/tutors", get(handlers::list_tutors::<R, S>))
        .route("/board/demands", get(handlers::list_demands::<R, S>))
        .route("/tutor-posts", post(handlers::publish_tutor::<R, S>))
        .route("/demand-posts", post(handlers::publish_demand::<R, S>))
        .route(
            "/upload-verification",
            post(handlers::upload_verification::<R, S>).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
