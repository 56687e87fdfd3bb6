//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod manage_listings;
pub mod moderate;
pub mod pending_review;
pub mod sign_in;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AdminConfig;
pub use manage_listings::{ManageDemandsUseCase, ManageTutorsUseCase};
pub use moderate::ModerateTutorUseCase;
pub use pending_review::{PendingReviewUseCase, PendingTutor};
pub use sign_in::{SignInInput, SignInUseCase};
