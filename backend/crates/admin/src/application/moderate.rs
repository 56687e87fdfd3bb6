//! Moderate Tutor Use Case
//!
//! Moves a pending tutor listing to verified or rejected.

use std::sync::Arc;

use board::domain::repository::TutorRepository;
use kernel::id::TutorPostId;

use crate::domain::moderation::ModerationAction;
use crate::error::{AdminError, AdminResult};

/// Moderate tutor use case
pub struct ModerateTutorUseCase<R>
where
    R: TutorRepository,
{
    repo: Arc<R>,
}

impl<R> ModerateTutorUseCase<R>
where
    R: TutorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Conditional write: succeeds only while the listing is still pending.
    ///
    /// Of two concurrent decisions on one listing exactly one wins; the other
    /// gets `AlreadyProcessed`, as does a missing listing.
    pub async fn execute(&self, id: TutorPostId, action: ModerationAction) -> AdminResult<()> {
        let applied = self
            .repo
            .transition_status(id, ModerationAction::FROM, action.target_status())
            .await?;

        if !applied {
            tracing::debug!(tutor_post_id = %id, action = %action, "Moderation precondition failed");
            return Err(AdminError::AlreadyProcessed);
        }

        tracing::info!(
            tutor_post_id = %id,
            action = %action,
            status = %action.target_status(),
            "Tutor listing moderated"
        );
        Ok(())
    }
}
