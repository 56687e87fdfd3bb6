//! Environment Configuration Helpers
//!
//! Values are read once at startup. A variable that is unset, or set to
//! whitespace only, counts as absent.

use std::env;

/// Read a variable, trimmed; empty means absent
pub fn env_trimmed(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|v| non_empty(&v))
}

/// Read a variable with a fallback
pub fn env_or(key: &str, default: &str) -> String {
    env_trimmed(key).unwrap_or_else(|| default.to_string())
}

/// Read a boolean flag (`1`, `true`, `yes`, `on`; case-insensitive)
pub fn env_flag(key: &str) -> Option<bool> {
    env_trimmed(key).map(|v| parse_flag(&v))
}

/// Trim a raw value; empty means absent
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  secret \n"), Some("secret".to_string()));
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(parse_flag("on"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(
            env_or("PLATFORM_TEST_SURELY_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
