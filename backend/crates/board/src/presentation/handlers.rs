//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Multipart, Query, State, multipart::MultipartRejection};
use axum::http::HeaderMap;
use chrono::Utc;
use kernel::id::{DemandPostId, TutorPostId};
use platform::identity::{IdentityProvider, bearer_token};
use platform::storage::BlobStore;
use std::sync::Arc;

use crate::application::config::BoardConfig;
use crate::application::{
    PublishDemandUseCase, PublishTutorUseCase, SearchDemandsUseCase, SearchTutorsUseCase,
    UploadVerificationInput, UploadVerificationUseCase, UploadedFile,
};
use crate::domain::criteria::{DemandCriteria, DemandQuery, TutorCriteria, TutorQuery};
use crate::domain::entity::{DemandDraft, DemandListing, TutorDraft, TutorListing};
use crate::domain::repository::{DemandRepository, TutorRepository};
use crate::error::{BoardError, BoardResult};
use crate::presentation::dto::{ListResponse, PublishResponse, UploadResponse};

/// Shared state for board handlers
///
/// A missing repository or store leaves the dependent endpoints answering 503.
pub struct BoardAppState<R, S>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    pub repo: Option<Arc<R>>,
    pub store: Option<Arc<S>>,
    pub config: Arc<BoardConfig>,
}

impl<R, S> Clone for BoardAppState<R, S>
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

impl<R, S> BoardAppState<R, S>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    fn repo(&self) -> BoardResult<Arc<R>> {
        self.repo.clone().ok_or(BoardError::DatabaseUnconfigured)
    }

    fn store(&self) -> BoardResult<Arc<S>> {
        self.store.clone().ok_or(BoardError::StorageUnconfigured)
    }
}

fn invalid_query(rejection: QueryRejection) -> BoardError {
    BoardError::invalid(format!("无效查询参数: {}", rejection.body_text()))
}

fn invalid_upload(detail: String) -> BoardError {
    BoardError::invalid(format!("无效的上传数据: {detail}"))
}

fn invalid_json(rejection: JsonRejection) -> BoardError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    BoardError::invalid("无效 JSON")
}

// ============================================================================
// Board
// ============================================================================

/// GET /api/board/tutors
pub async fn list_tutors<R, S>(
    State(state): State<BoardAppState<R, S>>,
    query: Result<Query<TutorQuery>, QueryRejection>,
) -> BoardResult<Json<ListResponse<TutorListing>>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let Query(query) = query.map_err(invalid_query)?;
    let criteria = TutorCriteria::parse(&query)?;

    let use_case = SearchTutorsUseCase::new(state.repo()?);
    let list = use_case.execute(&criteria).await?;

    Ok(Json(ListResponse { list }))
}

/// GET /api/board/demands
pub async fn list_demands<R, S>(
    State(state): State<BoardAppState<R, S>>,
    query: Result<Query<DemandQuery>, QueryRejection>,
) -> BoardResult<Json<ListResponse<DemandListing>>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let Query(query) = query.map_err(invalid_query)?;
    let criteria = DemandCriteria::parse(&query)?;

    let use_case = SearchDemandsUseCase::new(state.repo()?);
    let list = use_case.execute(&criteria).await?;

    Ok(Json(ListResponse { list }))
}

// ============================================================================
// Publishing
// ============================================================================

/// POST /api/tutor-posts
pub async fn publish_tutor<R, S>(
    State(state): State<BoardAppState<R, S>>,
    body: Result<Json<TutorDraft>, JsonRejection>,
) -> BoardResult<Json<PublishResponse<TutorPostId>>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let Json(draft) = body.map_err(invalid_json)?;

    let use_case = PublishTutorUseCase::new(state.repo()?);
    let id = use_case.execute(draft).await?;

    Ok(Json(PublishResponse::new(id)))
}

/// POST /api/demand-posts
pub async fn publish_demand<R, S>(
    State(state): State<BoardAppState<R, S>>,
    body: Result<Json<DemandDraft>, JsonRejection>,
) -> BoardResult<Json<PublishResponse<DemandPostId>>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + Send + Sync + 'static,
{
    let Json(draft) = body.map_err(invalid_json)?;

    let use_case = PublishDemandUseCase::new(state.repo()?);
    let id = use_case.execute(draft).await?;

    Ok(Json(PublishResponse::new(id)))
}

// ============================================================================
// Verification upload
// ============================================================================

/// POST /api/upload-verification
///
/// Requires `Authorization: Bearer <access token>` of the user named in `user_id`.
pub async fn upload_verification<R, S>(
    State(state): State<BoardAppState<R, S>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> BoardResult<Json<UploadResponse>>
where
    R: TutorRepository + DemandRepository + Send + Sync + 'static,
    S: BlobStore + IdentityProvider + Send + Sync + 'static,
{
    let store = state.store()?;
    let token = bearer_token(&headers).ok_or(BoardError::Unauthenticated)?;
    let caller = store
        .resolve_user(token)
        .await
        .map_err(|e| BoardError::storage("身份校验失败", e))?
        .ok_or(BoardError::Unauthenticated)?;

    let mut multipart = multipart.map_err(|e| invalid_upload(e.body_text()))?;

    let mut input = UploadVerificationInput::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| invalid_upload(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| invalid_upload(e.body_text()))?;
                input.user_id = Some(text);
            }
            "xinxue" | "student_id" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| invalid_upload(e.body_text()))?;
                let file = UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                };
                if name == "xinxue" {
                    input.xinxue = Some(file);
                } else {
                    input.student_id = Some(file);
                }
            }
            _ => {}
        }
    }

    let use_case = UploadVerificationUseCase::new(store, state.config.clone());
    let output = use_case
        .execute(input, &caller, Utc::now().timestamp_millis())
        .await?;

    Ok(Json(UploadResponse {
        path_xinxue: output.path_xinxue,
        path_student_id: output.path_student_id,
    }))
}
