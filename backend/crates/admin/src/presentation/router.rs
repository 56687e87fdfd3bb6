//! Admin Router
//!
//! Paths are relative to `/api/admin`. The router does not apply the gate
//! itself; see [`crate::presentation::middleware::admin_gate`].

use axum::{
    Router,
    routing::{get, post},
};
use board::PgBoardRepository;
use board::domain::repository::{DemandRepository, TutorRepository};
use platform::storage::{BlobStore, SupabaseStorage};
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::presentation::handlers::{self, AdminAppState};

/// Create the Admin router with the PostgreSQL repository and Supabase storage
pub fn admin_router(
    repo: Option<PgBoardRepository>,
    store: Option<SupabaseStorage>,
    config: AdminConfig,
) -> Router {
    admin_router_generic(repo, store, config)
}

/// Create a generic Admin router for any repository and blob store
pub fn admin_router_generic<R, S>(repo: Option<R>, store: Option<S>, config: AdminConfig) -> Router
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let state = AdminAppState {
        repo: repo.map(Arc::new),
        store: store.map(Arc::new),
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::sign_in::<R, S>))
        .route("/logout", post(handlers::sign_out::<R, S>))
        .route(
            "/tutor-verify",
            get(handlers::list_pending::<R, S>).patch(handlers::moderate::<R, S>),
        )
        .route(
            "/tutor-posts",
            get(handlers::list_tutors::<R, S>)
                .patch(handlers::update_tutor::<R, S>)
                .delete(handlers::delete_tutor::<R, S>),
        )
        .route(
            "/demand-posts",
            get(handlers::list_demands::<R, S>)
                .patch(handlers::update_demand::<R, S>)
                .delete(handlers::delete_demand::<R, S>),
        )
        .with_state(state)
}
