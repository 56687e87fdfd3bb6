//! Publish Demand Use Case
//!
//! Validates a parent submission and stores it. Demand listings are visible
//! immediately.

use std::sync::Arc;

use kernel::id::DemandPostId;

use crate::domain::entity::DemandDraft;
use crate::domain::repository::DemandRepository;
use crate::error::BoardResult;

/// Publish demand use case
pub struct PublishDemandUseCase<R>
where
    R: DemandRepository,
{
    repo: Arc<R>,
}

impl<R> PublishDemandUseCase<R>
where
    R: DemandRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: DemandDraft) -> BoardResult<DemandPostId> {
        let submission = draft.validate()?;
        let id = self.repo.insert(&submission).await?;

        tracing::info!(
            demand_post_id = %id,
            teach_mode = %submission.teach_mode,
            student_grade = %submission.student_grade(),
            "Demand listing published"
        );

        Ok(id)
    }
}
