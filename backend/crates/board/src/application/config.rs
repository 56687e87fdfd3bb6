//! Application Configuration
//!
//! Configuration for the Board application layer.

/// Board application configuration
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Bucket holding tutor verification documents
    pub verification_bucket: String,
    /// Upper bound for one uploaded verification file
    pub max_upload_bytes: usize,
    /// Extension used when an uploaded file name carries none
    pub default_upload_extension: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            verification_bucket: "verification".to_string(),
            max_upload_bytes: 10 * 1024 * 1024, // 10 MiB
            default_upload_extension: "jpg".to_string(),
        }
    }
}
