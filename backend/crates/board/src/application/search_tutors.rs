//! Search Tutors Use Case
//!
//! Board view over tutor listings.

use std::sync::Arc;

use crate::domain::criteria::TutorCriteria;
use crate::domain::entity::TutorListing;
use crate::domain::repository::TutorRepository;
use crate::error::BoardResult;

/// Search tutors use case
pub struct SearchTutorsUseCase<R>
where
    R: TutorRepository,
{
    repo: Arc<R>,
}

impl<R> SearchTutorsUseCase<R>
where
    R: TutorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Push down what the store can evaluate, then apply the grade/subject
    /// post filter. Store order (newest first) is kept; no pagination.
    pub async fn execute(&self, criteria: &TutorCriteria) -> BoardResult<Vec<TutorListing>> {
        let candidates = self.repo.search(&criteria.pushdown()).await?;
        let fetched = candidates.len();

        let list: Vec<TutorListing> = candidates
            .into_iter()
            .filter(|listing| criteria.post_filter(listing))
            .collect();

        tracing::debug!(fetched, returned = list.len(), "Tutor board search");
        Ok(list)
    }
}
