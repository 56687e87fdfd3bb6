//! Admin Session Token
//!
//! The session cookie carries `hex(HMAC-SHA256(secret, payload))`. The token
//! is deterministic: every login yields the same value, and a captured cookie
//! stays valid until the secret rotates.

use platform::crypto::{constant_time_eq, hmac_sha256_hex};

/// Expected cookie value for a secret and payload
pub fn session_token(secret: &[u8], payload: &str) -> String {
    hmac_sha256_hex(secret, payload.as_bytes())
}

/// Compare a presented cookie value against the expected token
///
/// Absent and empty cookies are rejected like any other mismatch.
pub fn verify_token(expected: &str, presented: Option<&str>) -> bool {
    match presented {
        Some(value) => constant_time_eq(expected.as_bytes(), value.as_bytes()),
        None => false,
    }
}

/// Which protected surface a request path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedArea {
    /// Admin pages: rejected requests are redirected to the login page
    Page,
    /// Admin API: rejected requests get a JSON error
    Api,
}

/// Login page; gated pages redirect here
pub const LOGIN_PAGE: &str = "/admin/login";

const PAGE_PREFIX: &str = "/admin";
const API_PREFIX: &str = "/api/admin";
const LOGIN_API: &str = "/api/admin/login";

fn under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

impl ProtectedArea {
    /// Classify a request path; `None` when the gate does not apply
    pub fn of(path: &str) -> Option<Self> {
        if under(path, API_PREFIX) {
            return (path != LOGIN_API).then_some(Self::Api);
        }
        if under(path, PAGE_PREFIX) {
            return (!path.starts_with(LOGIN_PAGE)).then_some(Self::Page);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_hex_hmac() {
        let token = session_token(b"secret", "admin");
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token, session_token(b"secret", "admin"));
        assert_ne!(token, session_token(b"other", "admin"));
        assert_ne!(token, session_token(b"secret", "user"));
    }

    #[test]
    fn test_verify_rejects_absent_empty_and_foreign() {
        let expected = session_token(b"secret", "admin");
        assert!(verify_token(&expected, Some(&expected)));
        assert!(!verify_token(&expected, None));
        assert!(!verify_token(&expected, Some("")));
        assert!(!verify_token(&expected, Some(&session_token(b"other", "admin"))));
        assert!(!verify_token(&expected, Some(&expected.to_uppercase())));
    }

    #[test]
    fn test_protected_areas() {
        assert_eq!(ProtectedArea::of("/admin"), Some(ProtectedArea::Page));
        assert_eq!(ProtectedArea::of("/admin/posts"), Some(ProtectedArea::Page));
        assert_eq!(ProtectedArea::of("/admin/login"), None);
        assert_eq!(ProtectedArea::of("/admin/login/reset"), None);

        assert_eq!(ProtectedArea::of("/api/admin/tutor-verify"), Some(ProtectedArea::Api));
        assert_eq!(ProtectedArea::of("/api/admin/logout"), Some(ProtectedArea::Api));
        assert_eq!(ProtectedArea::of("/api/admin/login"), None);

        assert_eq!(ProtectedArea::of("/api/board/tutors"), None);
        assert_eq!(ProtectedArea::of("/administrator"), None);
        assert_eq!(ProtectedArea::of("/"), None);
    }
}
