//! Board Error Types
//!
//! This module provides board-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use std::borrow::Cow;
use thiserror::Error;

use crate::domain::eligibility::IneligibleSubject;
use crate::domain::value_object::UnknownLabel;
use crate::domain::value_object::salary::SalaryError;

/// Board-specific result type alias
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-specific error variants
#[derive(Debug, Error)]
pub enum BoardError {
    /// Malformed input; the message is shown to the user as-is
    #[error("{0}")]
    Invalid(Cow<'static, str>),

    /// A label outside its vocabulary
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabel),

    /// A phase wildcard without a grade in its phase
    #[error(transparent)]
    Ineligible(#[from] IneligibleSubject),

    /// Invalid salary bounds
    #[error(transparent)]
    Salary(#[from] SalaryError),

    /// `DATABASE_URL` is not configured
    #[error("未配置数据库连接 (DATABASE_URL)")]
    DatabaseUnconfigured,

    /// Blob storage is not configured
    #[error("未配置存储服务 (SUPABASE_URL / SUPABASE_SERVICE_ROLE_KEY)")]
    StorageUnconfigured,

    /// Upload without a valid end-user token
    #[error("请先登录")]
    Unauthenticated,

    /// Upload into another user's folder
    #[error("只能上传本人的证件")]
    Forbidden,

    /// Listing not found
    #[error("记录不存在")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Blob storage error, with what was being stored
    #[error("{context}：{source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },

    /// A stored row that does not decode
    #[error("Corrupt listing row: {0}")]
    CorruptRow(String),
}

impl BoardError {
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        BoardError::Invalid(message.into())
    }

    pub fn storage(context: &'static str, source: StorageError) -> Self {
        BoardError::Storage { context, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::Invalid(_)
            | BoardError::UnknownLabel(_)
            | BoardError::Ineligible(_)
            | BoardError::Salary(_) => ErrorKind::ValidationFailed,
            BoardError::DatabaseUnconfigured | BoardError::StorageUnconfigured => {
                ErrorKind::ConfigurationMissing
            }
            BoardError::Unauthenticated => ErrorKind::AuthenticationFailed,
            BoardError::Forbidden => ErrorKind::Forbidden,
            BoardError::NotFound => ErrorKind::NotFound,
            BoardError::Database(_) | BoardError::Storage { .. } => ErrorKind::UpstreamFailure,
            BoardError::CorruptRow(_) => ErrorKind::Internal,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BoardError::Database(e) => {
                tracing::error!(error = %e, "Board database error");
            }
            BoardError::Storage { context, source } => {
                tracing::error!(context = %context, error = %source, "Board storage error");
            }
            BoardError::CorruptRow(msg) => {
                tracing::error!(message = %msg, "Corrupt listing row");
            }
            BoardError::DatabaseUnconfigured | BoardError::StorageUnconfigured => {
                tracing::error!(error = %self, "Board dependency not configured");
            }
            _ => {
                tracing::debug!(error = %self, "Board error");
            }
        }
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        match err {
            // Upstream message passes through unchanged
            BoardError::Database(e) => {
                AppError::new(ErrorKind::UpstreamFailure, e.to_string()).with_source(e)
            }
            other => AppError::new(other.kind(), other.to_string()).with_source(other),
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::Subject;

    #[test]
    fn test_kinds() {
        assert_eq!(
            BoardError::invalid("x").kind(),
            ErrorKind::ValidationFailed
        );
        assert_eq!(
            BoardError::from(IneligibleSubject {
                subject: Subject::PrimaryAll
            })
            .kind(),
            ErrorKind::ValidationFailed
        );
        assert_eq!(
            BoardError::DatabaseUnconfigured.kind(),
            ErrorKind::ConfigurationMissing
        );
        assert_eq!(BoardError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            BoardError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::UpstreamFailure
        );
    }

    #[test]
    fn test_app_error_keeps_message() {
        let app: AppError = BoardError::invalid("请至少选择一个年级").into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "请至少选择一个年级");

        let app: AppError = BoardError::StorageUnconfigured.into();
        assert_eq!(app.status_code(), 503);

        let app: AppError = BoardError::Forbidden.into();
        assert_eq!(app.status_code(), 403);
        assert_eq!(app.message(), "只能上传本人的证件");
    }

    #[test]
    fn test_database_error_passes_upstream_message() {
        let upstream = sqlx::Error::PoolTimedOut.to_string();

        let app = AppError::from(BoardError::Database(sqlx::Error::PoolTimedOut));

        assert_eq!(app.status_code(), 500);
        assert_eq!(app.kind(), ErrorKind::UpstreamFailure);
        assert_eq!(app.message(), upstream);
    }
}
