//! Check Session Use Case
//!
//! Gate check for admin pages and the admin API.

use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::session::{session_token, verify_token};
use crate::error::{AdminError, AdminResult};

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AdminConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AdminConfig>) -> Self {
        Self { config }
    }

    /// `SecretUnconfigured` regardless of the cookie when no secret is set;
    /// `NotSignedIn` for an absent, empty or mismatching cookie.
    pub fn execute(&self, cookie: Option<&str>) -> AdminResult<()> {
        let secret = self
            .config
            .session_secret
            .as_deref()
            .ok_or(AdminError::SecretUnconfigured)?;

        let expected = session_token(secret, &self.config.session_payload);
        if verify_token(&expected, cookie) {
            Ok(())
        } else {
            Err(AdminError::NotSignedIn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_identical() {
        let config = Arc::new(AdminConfig::default().with_secret_text(Some("secret")));
        let use_case = CheckSessionUseCase::new(config);

        let foreign_secret = session_token(b"other", "admin");
        let foreign_payload = session_token(b"secret", "user");
        for cookie in [None, Some(""), Some(foreign_secret.as_str()), Some(foreign_payload.as_str())] {
            assert!(matches!(use_case.execute(cookie), Err(AdminError::NotSignedIn)));
        }

        let valid = session_token(b"secret", "admin");
        assert!(use_case.execute(Some(&valid)).is_ok());
    }

    #[test]
    fn test_missing_secret_wins_over_cookie() {
        let use_case = CheckSessionUseCase::new(Arc::new(AdminConfig::default()));
        let cookie = session_token(b"secret", "admin");
        assert!(matches!(
            use_case.execute(Some(&cookie)),
            Err(AdminError::SecretUnconfigured)
        ));
    }
}
