//! Upload Verification Use Case
//!
//! Stores a tutor's two verification documents (学信网 screenshot and student
//! card) in the verification bucket and returns their blob paths, which the
//! tutor then submits as `auth_files`.

use std::sync::Arc;

use platform::storage::BlobStore;

use crate::application::config::BoardConfig;
use crate::error::{BoardError, BoardResult};

/// One uploaded file
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Upload input
#[derive(Debug, Clone, Default)]
pub struct UploadVerificationInput {
    pub user_id: Option<String>,
    pub xinxue: Option<UploadedFile>,
    pub student_id: Option<UploadedFile>,
}

/// Upload output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadVerificationOutput {
    pub path_xinxue: String,
    pub path_student_id: String,
}

/// Upload verification use case
pub struct UploadVerificationUseCase<S>
where
    S: BlobStore,
{
    store: Arc<S>,
    config: Arc<BoardConfig>,
}

impl<S> UploadVerificationUseCase<S>
where
    S: BlobStore,
{
    pub fn new(store: Arc<S>, config: Arc<BoardConfig>) -> Self {
        Self { store, config }
    }

    /// `caller` is the id the request's access token resolved to; callers may
    /// only write into their own folder.
    ///
    /// Paths are `{user_id}/xinxue_{ts}.{ext}` and
    /// `{user_id}/student_id_{ts}.{ext}`; existing objects are overwritten.
    pub async fn execute(
        &self,
        input: UploadVerificationInput,
        caller: &str,
        timestamp_ms: i64,
    ) -> BoardResult<UploadVerificationOutput> {
        let user_id = input.user_id.as_deref().map(str::trim).unwrap_or_default();
        if user_id != caller {
            return Err(BoardError::Forbidden);
        }
        if !is_safe_segment(user_id) {
            return Err(BoardError::invalid("需要有效的 user_id"));
        }
        let user_id = user_id.to_string();

        let (xinxue, student_id) = match (input.xinxue, input.student_id) {
            (Some(x), Some(s)) if !x.bytes.is_empty() && !s.bytes.is_empty() => (x, s),
            _ => return Err(BoardError::invalid("请上传学信网截图和学生证钢印页")),
        };

        for file in [&xinxue, &student_id] {
            if file.bytes.len() > self.config.max_upload_bytes {
                return Err(BoardError::invalid(format!(
                    "文件过大（上限 {} MB）",
                    self.config.max_upload_bytes / (1024 * 1024)
                )));
            }
        }

        let path_xinxue = format!(
            "{}/xinxue_{}.{}",
            user_id,
            timestamp_ms,
            self.extension(&xinxue)
        );
        let path_student_id = format!(
            "{}/student_id_{}.{}",
            user_id,
            timestamp_ms,
            self.extension(&student_id)
        );

        self.put(&path_xinxue, xinxue)
            .await
            .map_err(|e| BoardError::storage("学信网截图上传失败", e))?;
        self.put(&path_student_id, student_id)
            .await
            .map_err(|e| BoardError::storage("学生证上传失败", e))?;

        tracing::info!(user_id = %user_id, "Verification documents uploaded");

        Ok(UploadVerificationOutput {
            path_xinxue,
            path_student_id,
        })
    }

    async fn put(
        &self,
        path: &str,
        file: UploadedFile,
    ) -> Result<(), platform::storage::StorageError> {
        let content_type = file
            .content_type
            .unwrap_or_else(|| "application/octet-stream".to_string());
        self.store
            .upload(
                &self.config.verification_bucket,
                path,
                file.bytes,
                &content_type,
                true,
            )
            .await
    }

    fn extension(&self, file: &UploadedFile) -> String {
        file_extension(file.file_name.as_deref())
            .unwrap_or_else(|| self.config.default_upload_extension.clone())
    }
}

/// Lower-cased extension of a file name, if it has a sane one
fn file_extension(name: Option<&str>) -> Option<String> {
    let (_, ext) = name?.rsplit_once('.')?;
    let valid = !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}

/// A single path segment: no separators, no traversal
fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Some("scan.PNG")), Some("png".to_string()));
        assert_eq!(file_extension(Some("a.b.jpeg")), Some("jpeg".to_string()));
        assert_eq!(file_extension(Some("photo")), None);
        assert_eq!(file_extension(Some("weird.p/g")), None);
        assert_eq!(file_extension(None), None);
    }

    #[test]
    fn test_safe_segment() {
        assert!(is_safe_segment("8d3f6c1e-user"));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment(""));
    }
}
