//! Error Kind - Classification of failures
//!
//! Defines the [`ErrorKind`] enum. Every failure the marketplace can surface
//! falls into one of these buckets, and each bucket has exactly one HTTP status.

use serde::Serialize;

/// エラー種別の列挙体
///
/// マーケットプレイス全体で共通のエラー分類です。
/// どの種別も自動リトライの対象ではありません（リクエストは一度だけ試行されます）。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::ConfigurationMissing;
/// assert_eq!(kind.status_code(), 503);
/// assert_eq!(kind.as_str(), "Configuration Missing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - 入力が不正（本文の形式エラー、不変条件違反など）
    ValidationFailed,
    /// 401 - 管理者の認証に失敗、またはセッションが無効
    AuthenticationFailed,
    /// 403 - 認証済みだが対象へのアクセス権がない
    Forbidden,
    /// 404 - 対象のレコードが存在しない
    NotFound,
    /// 404 - 前提条件付き更新の失敗（すでに処理済み）
    PreconditionFailed,
    /// 500 - 永続化層・ストレージからのエラー
    UpstreamFailure,
    /// 500 - サーバー内部エラー
    Internal,
    /// 503 - 必須の設定値（シークレット・接続先）が未設定
    ConfigurationMissing,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::ValidationFailed.status_code(), 400);
    /// assert_eq!(ErrorKind::PreconditionFailed.status_code(), 404);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::ValidationFailed => 400,
            ErrorKind::AuthenticationFailed => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound | ErrorKind::PreconditionFailed => 404,
            ErrorKind::UpstreamFailure | ErrorKind::Internal => 500,
            ErrorKind::ConfigurationMissing => 503,
        }
    }

    /// 人間向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "Validation Failed",
            ErrorKind::AuthenticationFailed => "Authentication Failed",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::PreconditionFailed => "Precondition Failed",
            ErrorKind::UpstreamFailure => "Upstream Failure",
            ErrorKind::Internal => "Internal Error",
            ErrorKind::ConfigurationMissing => "Configuration Missing",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
