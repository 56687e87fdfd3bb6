//! Sign In Use Case
//!
//! Checks the single configured admin account and issues the session token.

use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::session::session_token;
use crate::error::{AdminError, AdminResult};

/// Sign in input
#[derive(Debug, Clone, Default)]
pub struct SignInInput {
    pub account: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase {
    config: Arc<AdminConfig>,
}

impl SignInUseCase {
    pub fn new(config: Arc<AdminConfig>) -> Self {
        Self { config }
    }

    /// Returns the cookie value on success.
    ///
    /// Account and password are trimmed and must equal the configured values
    /// exactly.
    pub fn execute(&self, input: SignInInput) -> AdminResult<String> {
        let (account, password) = self
            .config
            .credentials()
            .ok_or(AdminError::AccountUnconfigured)?;

        if input.account.trim() != account || input.password.trim() != password {
            return Err(AdminError::InvalidCredentials);
        }

        let secret = self
            .config
            .session_secret
            .as_deref()
            .ok_or(AdminError::SecretUnconfigured)?;

        tracing::info!("Admin signed in");
        Ok(session_token(secret, &self.config.session_payload))
    }
}
