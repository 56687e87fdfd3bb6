//! Domain Layer
//!
//! Session token rules, gate classification and moderation actions. Listing
//! entities and repositories come from the `board` crate.

pub mod moderation;
pub mod session;

pub use moderation::ModerationAction;
pub use session::{LOGIN_PAGE, ProtectedArea, session_token, verify_token};
