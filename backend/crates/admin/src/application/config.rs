//! Application Configuration
//!
//! Configuration for the Admin application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Admin application configuration
///
/// Every credential is optional: a missing account or secret disables
/// login and the gate answers 503 instead of the process refusing to start.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Admin account (phone number)
    pub account: Option<String>,
    /// Admin password
    pub password: Option<String>,
    /// Session secret key for HMAC signing
    pub session_secret: Option<Vec<u8>>,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Message the session token is computed over
    pub session_payload: String,
    /// Session cookie lifetime (1 week)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Cookie path; must cover both the admin pages and the admin API
    pub cookie_path: String,
    /// Bucket holding tutor verification documents
    pub verification_bucket: String,
    /// Lifetime of the signed URLs handed to reviewers (1 hour)
    pub cert_url_ttl: Duration,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            account: None,
            password: None,
            session_secret: None,
            session_cookie_name: "admin_session".to_string(),
            session_payload: "admin".to_string(),
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            cookie_path: "/".to_string(),
            verification_bucket: "verification".to_string(),
            cert_url_ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}

impl AdminConfig {
    /// Set the secret from its textual form; blank means unset
    pub fn with_secret_text(mut self, secret: Option<&str>) -> Self {
        self.session_secret = secret
            .and_then(platform::config::non_empty)
            .map(String::into_bytes);
        self
    }

    /// Configured account and password, trimmed; `None` unless both are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let account = self.account.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((account, password))
    }

    /// Session cookie attributes
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: self.cookie_path.clone(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_need_both_parts() {
        let mut config = AdminConfig {
            account: Some(" 13800000000 ".to_string()),
            ..AdminConfig::default()
        };
        assert_eq!(config.credentials(), None);

        config.password = Some("  ".to_string());
        assert_eq!(config.credentials(), None);

        config.password = Some("correctpass".to_string());
        assert_eq!(config.credentials(), Some(("13800000000", "correctpass")));
    }

    #[test]
    fn test_secret_text_is_trimmed() {
        let config = AdminConfig::default().with_secret_text(Some("  s3cret \n"));
        assert_eq!(config.session_secret.as_deref(), Some(b"s3cret".as_slice()));

        let config = AdminConfig::default().with_secret_text(Some("   "));
        assert_eq!(config.session_secret, None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = AdminConfig::default().session_cookie().build_set_cookie("abc");
        assert!(cookie.starts_with("admin_session=abc"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("Path=/"));
    }
}
