//! Domain Layer
//!
//! Vocabularies, the eligibility rules, listing entities, board criteria and
//! repository traits.

pub mod criteria;
pub mod eligibility;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use criteria::{DemandCriteria, DemandQuery, TutorCriteria, TutorPushdown, TutorQuery};
pub use entity::{
    DemandDraft, DemandListing, DemandPatch, DemandSubmission, TutorDraft, TutorListing,
    TutorPatch, TutorSubmission,
};
pub use repository::{DemandRepository, TutorRepository};
