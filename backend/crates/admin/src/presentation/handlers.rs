//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use board::BoardError;
use board::domain::repository::{DemandRepository, TutorRepository};
use board::models::{DemandListing, DemandPatch, TutorListing, TutorPatch};
use kernel::id::Id;
use platform::storage::BlobStore;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::application::{
    ManageDemandsUseCase, ManageTutorsUseCase, ModerateTutorUseCase, PendingReviewUseCase,
    PendingTutor, SignInInput, SignInUseCase,
};
use crate::domain::moderation::ModerationAction;
use crate::error::{AdminError, AdminResult};
use crate::presentation::dto::{
    DeleteRequest, ListResponse, LoginRequest, ModerationRequest, OkResponse, UpdateRequest,
};

/// Shared state for admin handlers
pub struct AdminAppState<R, S>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    pub repo: Option<Arc<R>>,
    pub store: Option<Arc<S>>,
    pub config: Arc<AdminConfig>,
}

impl<R, S> Clone for AdminAppState<R, S>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, S> AdminAppState<R, S>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    fn repo(&self) -> AdminResult<Arc<R>> {
        self.repo
            .clone()
            .ok_or(AdminError::Board(BoardError::DatabaseUnconfigured))
    }

    fn store(&self) -> AdminResult<Arc<S>> {
        self.store
            .clone()
            .ok_or(AdminError::Board(BoardError::StorageUnconfigured))
    }
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AdminResult<T> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AdminError::invalid("无效 JSON")
    })
}

fn parse_id<T>(raw: Option<String>, missing: &'static str) -> AdminResult<Id<T>> {
    let raw = raw
        .and_then(|s| platform::config::non_empty(&s))
        .ok_or_else(|| AdminError::invalid(missing))?;
    raw.parse()
        .map_err(|_| AdminError::invalid(format!("无效的 id: {raw}")))
}

fn parse_patch<P: DeserializeOwned>(update: serde_json::Value) -> AdminResult<P> {
    serde_json::from_value(update).map_err(|e| AdminError::invalid(format!("无效的 update: {e}")))
}

// ============================================================================
// Session
// ============================================================================

/// POST /api/admin/login
pub async fn sign_in<R, S>(
    State(state): State<AdminAppState<R, S>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AdminResult<impl IntoResponse>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    // Unconfigured account is reported before the body is looked at
    if state.config.credentials().is_none() {
        return Err(AdminError::AccountUnconfigured);
    }
    let Json(req) = body.map_err(|_| AdminError::MalformedCredentials)?;

    let use_case = SignInUseCase::new(state.config.clone());
    let token = use_case.execute(SignInInput {
        account: req.phone.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    })?;

    let cookie = state.config.session_cookie().build_set_cookie(&token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(OkResponse::ok()),
    ))
}

/// POST /api/admin/logout
pub async fn sign_out<R, S>(State(state): State<AdminAppState<R, S>>) -> impl IntoResponse
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let cookie = state.config.session_cookie().build_delete_cookie();
    tracing::info!("Admin signed out");

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(OkResponse::ok()),
    )
}

// ============================================================================
// Tutor moderation
// ============================================================================

/// GET /api/admin/tutor-verify
pub async fn list_pending<R, S>(
    State(state): State<AdminAppState<R, S>>,
) -> AdminResult<Json<ListResponse<PendingTutor>>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let use_case = PendingReviewUseCase::new(state.repo()?, state.store()?, state.config.clone());
    let list = use_case.execute().await?;

    Ok(Json(ListResponse { list }))
}

/// PATCH /api/admin/tutor-verify
pub async fn moderate<R, S>(
    State(state): State<AdminAppState<R, S>>,
    body: Result<Json<ModerationRequest>, JsonRejection>,
) -> AdminResult<Json<OkResponse>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    const USAGE: &str = "需要 id 和 action: approve | reject";

    let repo = state.repo()?;
    let req = json_body(body)?;

    let action = req
        .action
        .as_deref()
        .and_then(ModerationAction::parse)
        .ok_or_else(|| AdminError::invalid(USAGE))?;
    let id = parse_id(req.id, USAGE)?;

    ModerateTutorUseCase::new(repo).execute(id, action).await?;

    Ok(Json(OkResponse::ok()))
}

// ============================================================================
// Tutor listings
// ============================================================================

/// GET /api/admin/tutor-posts
pub async fn list_tutors<R, S>(
    State(state): State<AdminAppState<R, S>>,
) -> AdminResult<Json<ListResponse<TutorListing>>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let list = ManageTutorsUseCase::new(state.repo()?).list().await?;
    Ok(Json(ListResponse { list }))
}

/// PATCH /api/admin/tutor-posts
pub async fn update_tutor<R, S>(
    State(state): State<AdminAppState<R, S>>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> AdminResult<Json<OkResponse>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    const USAGE: &str = "需要 id 和 update 字段";

    let repo = state.repo()?;
    let req = json_body(body)?;

    let update = req.update.ok_or_else(|| AdminError::invalid(USAGE))?;
    let id = parse_id(req.id, USAGE)?;
    let patch: TutorPatch = parse_patch(update)?;

    ManageTutorsUseCase::new(repo).update(id, patch).await?;

    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/admin/tutor-posts
pub async fn delete_tutor<R, S>(
    State(state): State<AdminAppState<R, S>>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> AdminResult<Json<OkResponse>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let repo = state.repo()?;
    let req = json_body(body)?;
    let id = parse_id(req.id, "需要 id")?;

    ManageTutorsUseCase::new(repo).delete(id).await?;

    Ok(Json(OkResponse::ok()))
}

// ============================================================================
// Demand listings
// ============================================================================

/// GET /api/admin/demand-posts
pub async fn list_demands<R, S>(
    State(state): State<AdminAppState<R, S>>,
) -> AdminResult<Json<ListResponse<DemandListing>>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let list = ManageDemandsUseCase::new(state.repo()?).list().await?;
    Ok(Json(ListResponse { list }))
}

/// PATCH /api/admin/demand-posts
pub async fn update_demand<R, S>(
    State(state): State<AdminAppState<R, S>>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> AdminResult<Json<OkResponse>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    const USAGE: &str = "需要 id 和 update 字段";

    let repo = state.repo()?;
    let req = json_body(body)?;

    let update = req.update.ok_or_else(|| AdminError::invalid(USAGE))?;
    let id = parse_id(req.id, USAGE)?;
    let patch: DemandPatch = parse_patch(update)?;

    ManageDemandsUseCase::new(repo).update(id, patch).await?;

    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/admin/demand-posts
pub async fn delete_demand<R, S>(
    State(state): State<AdminAppState<R, S>>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> AdminResult<Json<OkResponse>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let repo = state.repo()?;
    let req = json_body(body)?;
    let id = parse_id(req.id, "需要 id")?;

    ManageDemandsUseCase::new(repo).delete(id).await?;

    Ok(Json(OkResponse::ok()))
}
