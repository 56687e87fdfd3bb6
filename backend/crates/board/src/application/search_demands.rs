//! Search Demands Use Case

use std::sync::Arc;

use crate::domain::criteria::DemandCriteria;
use crate::domain::entity::DemandListing;
use crate::domain::repository::DemandRepository;
use crate::error::BoardResult;

/// Search demands use case
pub struct SearchDemandsUseCase<R>
where
    R: DemandRepository,
{
    repo: Arc<R>,
}

impl<R> SearchDemandsUseCase<R>
where
    R: DemandRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every predicate is pushed down; no status filter applies to demands
    pub async fn execute(&self, criteria: &DemandCriteria) -> BoardResult<Vec<DemandListing>> {
        let list = self.repo.search(criteria).await?;
        tracing::debug!(returned = list.len(), "Demand board search");
        Ok(list)
    }
}
