//! Repository Traits
//!
//! Interfaces for listing persistence. Implementations are in the
//! infrastructure layer. Every list is ordered by creation time, newest first.

use kernel::id::{DemandPostId, TutorPostId};

use crate::domain::criteria::{DemandCriteria, TutorPushdown};
use crate::domain::entity::{DemandListing, DemandSubmission, TutorListing, TutorSubmission};
use crate::domain::value_object::ListingStatus;
use crate::error::BoardResult;

/// Tutor listing repository trait
#[trait_variant::make(TutorRepository: Send)]
pub trait LocalTutorRepository {
    /// Board search: board-visible listings admitted by the pushdown predicates
    async fn search(&self, pushdown: &TutorPushdown) -> BoardResult<Vec<TutorListing>>;

    /// Listings with the given status, or every listing when `None`
    async fn list(&self, status: Option<ListingStatus>) -> BoardResult<Vec<TutorListing>>;

    /// Find listing by ID
    async fn find_by_id(&self, id: TutorPostId) -> BoardResult<Option<TutorListing>>;

    /// Insert a new listing with status `pending`
    async fn insert(&self, submission: &TutorSubmission) -> BoardResult<TutorPostId>;

    /// Overwrite the editable columns; `false` when the row does not exist
    async fn update(&self, id: TutorPostId, submission: &TutorSubmission) -> BoardResult<bool>;

    /// Delete; `false` when the row does not exist
    async fn delete(&self, id: TutorPostId) -> BoardResult<bool>;

    /// Compare-and-swap on the status column.
    ///
    /// Writes `next` only if the row's status still equals `expected`.
    /// Returns `false` when no row matched (missing, or already moved on).
    async fn transition_status(
        &self,
        id: TutorPostId,
        expected: ListingStatus,
        next: ListingStatus,
    ) -> BoardResult<bool>;
}

/// Demand listing repository trait
#[trait_variant::make(DemandRepository: Send)]
pub trait LocalDemandRepository {
    /// Board search: literal equality on every supplied predicate
    async fn search(&self, criteria: &DemandCriteria) -> BoardResult<Vec<DemandListing>>;

    /// Every demand listing
    async fn list(&self) -> BoardResult<Vec<DemandListing>>;

    /// Find listing by ID
    async fn find_by_id(&self, id: DemandPostId) -> BoardResult<Option<DemandListing>>;

    /// Insert a new listing
    async fn insert(&self, submission: &DemandSubmission) -> BoardResult<DemandPostId>;

    /// Overwrite the editable columns; `false` when the row does not exist
    async fn update(&self, id: DemandPostId, submission: &DemandSubmission) -> BoardResult<bool>;

    /// Delete; `false` when the row does not exist
    async fn delete(&self, id: DemandPostId) -> BoardResult<bool>;
}
