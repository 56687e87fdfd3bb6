//! Board (Listings) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Vocabularies, eligibility rules, listing entities, criteria
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Tutor and parent (demand) listings, validated before they are stored
//! - Grade/subject eligibility: a phase wildcard ("初中全科") needs a grade
//!   in that phase
//! - Board search with typed filter criteria; tutor search pushes mode,
//!   region and salary bounds down to Postgres and post-filters grade and
//!   subject wildcards in memory
//! - Verification document upload to blob storage
//!
//! Moderation of tutor listings lives in the `admin` crate, on top of the
//! repository traits exported here.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use infra::postgres::PgBoardRepository;
pub use presentation::router::board_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgBoardRepository as BoardStore;

    #[cfg(any(test, feature = "memory"))]
    pub use crate::infra::memory::MemoryBoardRepository as MemoryBoardStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
