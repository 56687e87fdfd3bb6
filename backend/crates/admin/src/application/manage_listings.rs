//! Manage Listings Use Cases
//!
//! Full listing views and typed edits/deletes for admins. An edit is applied
//! to the draft form of the stored listing and validated like a fresh
//! submission; moderation status is never touched here.

use std::sync::Arc;

use board::domain::repository::{DemandRepository, TutorRepository};
use board::models::{DemandListing, DemandPatch, TutorListing, TutorPatch};
use kernel::id::{DemandPostId, TutorPostId};

use crate::error::{AdminError, AdminResult};

// ============================================================================
// Tutor listings
// ============================================================================

/// Manage tutors use case
pub struct ManageTutorsUseCase<R>
where
    R: TutorRepository,
{
    repo: Arc<R>,
}

impl<R> ManageTutorsUseCase<R>
where
    R: TutorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every tutor listing, any status, newest first
    pub async fn list(&self) -> AdminResult<Vec<TutorListing>> {
        Ok(self.repo.list(None).await?)
    }

    pub async fn update(&self, id: TutorPostId, patch: TutorPatch) -> AdminResult<()> {
        if patch.is_empty() {
            return Err(AdminError::invalid("update 不能为空"));
        }

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AdminError::NotFound)?;

        let mut draft = current.to_draft();
        patch.apply(&mut draft);
        let submission = draft.validate()?;

        if !self.repo.update(id, &submission).await? {
            return Err(AdminError::NotFound);
        }

        tracing::info!(tutor_post_id = %id, "Tutor listing updated by admin");
        Ok(())
    }

    pub async fn delete(&self, id: TutorPostId) -> AdminResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AdminError::NotFound);
        }

        tracing::info!(tutor_post_id = %id, "Tutor listing deleted by admin");
        Ok(())
    }
}

// ============================================================================
// Demand listings
// ============================================================================

/// Manage demands use case
pub struct ManageDemandsUseCase<R>
where
    R: DemandRepository,
{
    repo: Arc<R>,
}

impl<R> ManageDemandsUseCase<R>
where
    R: DemandRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every demand listing, newest first
    pub async fn list(&self) -> AdminResult<Vec<DemandListing>> {
        Ok(self.repo.list().await?)
    }

    pub async fn update(&self, id: DemandPostId, patch: DemandPatch) -> AdminResult<()> {
        if patch.is_empty() {
            return Err(AdminError::invalid("update 不能为空"));
        }

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AdminError::NotFound)?;

        let mut draft = current.to_draft();
        patch.apply(&mut draft);
        let submission = draft.validate()?;

        if !self.repo.update(id, &submission).await? {
            return Err(AdminError::NotFound);
        }

        tracing::info!(demand_post_id = %id, "Demand listing updated by admin");
        Ok(())
    }

    pub async fn delete(&self, id: DemandPostId) -> AdminResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AdminError::NotFound);
        }

        tracing::info!(demand_post_id = %id, "Demand listing deleted by admin");
        Ok(())
    }
}
