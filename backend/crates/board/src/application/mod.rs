//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod publish_demand;
pub mod publish_tutor;
pub mod search_demands;
pub mod search_tutors;
pub mod upload_verification;

// Re-exports
pub use config::BoardConfig;
pub use publish_demand::PublishDemandUseCase;
pub use publish_tutor::PublishTutorUseCase;
pub use search_demands::SearchDemandsUseCase;
pub use search_tutors::SearchTutorsUseCase;
pub use upload_verification::{
    UploadVerificationInput, UploadVerificationOutput, UploadVerificationUseCase, UploadedFile,
};
