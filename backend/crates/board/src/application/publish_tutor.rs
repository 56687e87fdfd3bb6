//! Publish Tutor Use Case
//!
//! Validates a tutor submission and stores it as `pending`.

use std::sync::Arc;

use kernel::id::TutorPostId;

use crate::domain::entity::TutorDraft;
use crate::domain::repository::TutorRepository;
use crate::error::BoardResult;

/// Publish tutor use case
pub struct PublishTutorUseCase<R>
where
    R: TutorRepository,
{
    repo: Arc<R>,
}

impl<R> PublishTutorUseCase<R>
where
    R: TutorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: TutorDraft) -> BoardResult<TutorPostId> {
        let submission = draft.validate()?;
        let id = self.repo.insert(&submission).await?;

        tracing::info!(
            tutor_post_id = %id,
            teach_mode = %submission.teach_mode,
            grades = submission.grades.len(),
            subjects = submission.subjects.len(),
            "Tutor listing published"
        );

        Ok(id)
    }
}
