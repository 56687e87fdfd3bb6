//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field yields the endpoint's
//! own 400 message rather than a generic deserialization error.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Account (phone number)
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// `{ok: true}`
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Listing response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub list: Vec<T>,
}

/// `PATCH /api/admin/tutor-verify`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModerationRequest {
    pub id: Option<String>,
    pub action: Option<String>,
}

/// `PATCH /api/admin/{tutor,demand}-posts`
///
/// `update` stays raw until the handler knows which patch type to read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateRequest {
    pub id: Option<String>,
    pub update: Option<serde_json::Value>,
}

/// `DELETE /api/admin/{tutor,demand}-posts`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteRequest {
    pub id: Option<String>,
}
