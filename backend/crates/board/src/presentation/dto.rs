//! API DTOs (Data Transfer Objects)

use serde::Serialize;

/// Board listing response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub list: Vec<T>,
}

/// Publish response
#[derive(Debug, Clone, Serialize)]
pub struct PublishResponse<Id> {
    pub ok: bool,
    pub id: Id,
}

impl<Id> PublishResponse<Id> {
    pub fn new(id: Id) -> Self {
        Self { ok: true, id }
    }
}

/// Verification upload response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub path_xinxue: String,
    pub path_student_id: String,
}
