//! Admin Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session token rules, gate classification, moderation actions
//! - `application/` - Use cases
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! Persistence is the `board` crate's: the admin surface works on the same
//! repository traits and listing entities.
//!
//! ## Features
//! - Single configured admin account, cookie session
//! - Gate over `/admin` pages and the `/api/admin` API
//! - Tutor moderation (pending → verified / rejected) as a conditional write
//! - Listing management: full lists, typed edits, deletes
//!
//! ## Security Model
//! - The session cookie is `hex(HMAC-SHA256(secret, "admin"))`, HttpOnly,
//!   SameSite=Lax, 7 days
//! - Compared in constant time
//! - The token is the same for every login; rotating the secret is the only
//!   way to revoke a captured cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AdminConfig;
pub use error::{AdminError, AdminResult};
pub use presentation::middleware::{AdminGateState, admin_gate};
pub use presentation::router::admin_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
