//! Caller Identity
//!
//! Resolves an end-user access token to the user id it was issued for, via
//! `GET {url}/auth/v1/user` on the storage provider's auth service.

use axum::http::header;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::storage::{StorageResult, SupabaseStorage};

/// Identity lookup contract
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// `Ok(None)` when the token is missing, expired or forged
    async fn resolve_user(&self, access_token: &str) -> StorageResult<Option<String>>;
}

#[derive(Deserialize)]
struct AuthUser {
    id: String,
}

/// `Authorization: Bearer <token>` value, if present and non-empty
pub fn bearer_token(headers: &header::HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl SupabaseStorage {
    fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.config.base_url)
    }
}

impl IdentityProvider for SupabaseStorage {
    async fn resolve_user(&self, access_token: &str) -> StorageResult<Option<String>> {
        let response = self
            .client
            .get(self.user_url())
            .bearer_auth(access_token)
            .header("apikey", &self.config.service_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => {
                let user: AuthUser = response.json().await?;
                Ok(Some(user.id))
            }
            _ => Err(Self::rejected(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageConfig;

    fn headers(value: &str) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("bearer  abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&header::HeaderMap::new()), None);
    }

    #[test]
    fn test_user_url() {
        let config = StorageConfig::from_parts(
            Some("https://demo.supabase.co/".to_string()),
            Some("service-key".to_string()),
        )
        .unwrap();
        assert_eq!(
            SupabaseStorage::new(config).user_url(),
            "https://demo.supabase.co/auth/v1/user"
        );
    }
}
