//! Admin Gate Middleware
//!
//! Guards admin pages and the admin API with the session cookie. Apply it
//! to the outermost router so that it sees full request paths:
//!
//! ```ignore
//! app.layer(axum::middleware::from_fn_with_state(
//!     AdminGateState::new(config),
//!     admin_gate,
//! ))
//! ```

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AdminConfig;
use crate::domain::session::{LOGIN_PAGE, ProtectedArea};

/// Middleware state
#[derive(Clone)]
pub struct AdminGateState {
    pub config: Arc<AdminConfig>,
}

impl AdminGateState {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Middleware that requires a valid admin session under the protected prefixes
///
/// Pages are redirected to the login page (303); API calls get the JSON
/// error (401, or 503 when no secret is configured).
pub async fn admin_gate(
    State(state): State<AdminGateState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(area) = ProtectedArea::of(req.uri().path()) else {
        return Ok(next.run(req).await);
    };

    let cookie = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.config.clone());
    match use_case.execute(cookie.as_deref()) {
        Ok(()) => Ok(next.run(req).await),
        Err(e) => match area {
            ProtectedArea::Api => Err(e.into_response()),
            ProtectedArea::Page => {
                tracing::debug!(path = %req.uri().path(), error = %e, "Redirecting to admin login");
                Err(Redirect::to(LOGIN_PAGE).into_response())
            }
        },
    }
}
