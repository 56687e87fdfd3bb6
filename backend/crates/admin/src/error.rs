//! Admin Error Types
//!
//! This module provides admin-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use board::BoardError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::borrow::Cow;
use thiserror::Error;

/// Admin-specific result type alias
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-specific error variants
#[derive(Debug, Error)]
pub enum AdminError {
    /// `ADMIN_PHONE` / `ADMIN_PASSWORD` not configured
    #[error("未配置管理员账号(ADMIN_PHONE/ADMIN_PASSWORD)")]
    AccountUnconfigured,

    /// `ADMIN_SESSION_SECRET` not configured
    #[error("未配置 ADMIN_SESSION_SECRET")]
    SecretUnconfigured,

    /// Login body could not be read
    #[error("请提供账号和密码")]
    MalformedCredentials,

    /// Wrong account or password
    #[error("账号或密码错误")]
    InvalidCredentials,

    /// Missing or mismatching session cookie
    #[error("请先登录管理员后台")]
    NotSignedIn,

    /// Malformed request; the message is shown as-is
    #[error("{0}")]
    Invalid(Cow<'static, str>),

    /// Moderation precondition failed: the listing is gone or no longer pending
    #[error("记录不存在或已处理")]
    AlreadyProcessed,

    /// Listing not found
    #[error("记录不存在")]
    NotFound,

    /// Listing validation or persistence error
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl AdminError {
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        AdminError::Invalid(message.into())
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::AccountUnconfigured | AdminError::SecretUnconfigured => {
                ErrorKind::ConfigurationMissing
            }
            AdminError::MalformedCredentials | AdminError::Invalid(_) => {
                ErrorKind::ValidationFailed
            }
            AdminError::InvalidCredentials | AdminError::NotSignedIn => {
                ErrorKind::AuthenticationFailed
            }
            AdminError::AlreadyProcessed => ErrorKind::PreconditionFailed,
            AdminError::NotFound => ErrorKind::NotFound,
            AdminError::Board(e) => e.kind(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdminError::InvalidCredentials => {
                tracing::warn!("Admin login failed: invalid credentials");
            }
            AdminError::NotSignedIn => {
                tracing::warn!("Admin request without a valid session");
            }
            AdminError::AccountUnconfigured | AdminError::SecretUnconfigured => {
                tracing::error!(error = %self, "Admin dependency not configured");
            }
            // Logged by BoardError's own response path
            AdminError::Board(_) => {}
            _ => {
                tracing::debug!(error = %self, "Admin error");
            }
        }
    }
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Board(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()).with_source(other),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            AdminError::Board(e) => e.into_response(),
            other => {
                other.log();
                AppError::from(other).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AdminError::AccountUnconfigured, 503),
            (AdminError::SecretUnconfigured, 503),
            (AdminError::MalformedCredentials, 400),
            (AdminError::InvalidCredentials, 401),
            (AdminError::NotSignedIn, 401),
            (AdminError::AlreadyProcessed, 404),
            (AdminError::NotFound, 404),
            (AdminError::Board(BoardError::DatabaseUnconfigured), 503),
            (AdminError::Board(BoardError::invalid("请选择院校")), 400),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_messages_pass_through() {
        let app: AppError = AdminError::AlreadyProcessed.into();
        assert_eq!(app.message(), "记录不存在或已处理");
        assert_eq!(app.kind(), ErrorKind::PreconditionFailed);

        let app: AppError = AdminError::Board(BoardError::invalid("请选择院校")).into();
        assert_eq!(app.message(), "请选择院校");
    }
}
