//! In-Memory Repository Implementation
//!
//! Evaluates the same predicates the SQL does, through
//! [`TutorPushdown::admits`] and [`DemandCriteria::matches`].

use chrono::Utc;
use kernel::id::{DemandPostId, TutorPostId};
use tokio::sync::Mutex;

use crate::domain::criteria::{DemandCriteria, TutorPushdown};
use crate::domain::entity::{DemandListing, DemandSubmission, TutorListing, TutorSubmission};
use crate::domain::repository::{DemandRepository, TutorRepository};
use crate::domain::value_object::ListingStatus;
use crate::error::BoardResult;

/// In-memory listing repository
#[derive(Default)]
pub struct MemoryBoardRepository {
    tutors: Mutex<Vec<TutorListing>>,
    demands: Mutex<Vec<DemandListing>>,
}

impl MemoryBoardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a listing exactly as given, bypassing validation
    pub async fn seed_tutor(&self, listing: TutorListing) {
        self.tutors.lock().await.push(listing);
    }

    /// Store a listing exactly as given, bypassing validation
    pub async fn seed_demand(&self, listing: DemandListing) {
        self.demands.lock().await.push(listing);
    }
}

/// Newest first; among equal timestamps, the later insert first
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> chrono::DateTime<Utc>) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    out
}

impl TutorRepository for MemoryBoardRepository {
    async fn search(&self, pushdown: &TutorPushdown) -> BoardResult<Vec<TutorListing>> {
        let tutors = self.tutors.lock().await;
        let admitted: Vec<TutorListing> = tutors
            .iter()
            .filter(|l| pushdown.admits(l))
            .cloned()
            .collect();
        Ok(newest_first(&admitted, |l| l.created_at))
    }

    async fn list(&self, status: Option<ListingStatus>) -> BoardResult<Vec<TutorListing>> {
        let tutors = self.tutors.lock().await;
        let listed: Vec<TutorListing> = tutors
            .iter()
            .filter(|l| status.is_none_or(|s| l.status == s))
            .cloned()
            .collect();
        Ok(newest_first(&listed, |l| l.created_at))
    }

    async fn find_by_id(&self, id: TutorPostId) -> BoardResult<Option<TutorListing>> {
        let tutors = self.tutors.lock().await;
        Ok(tutors.iter().find(|l| l.id == id).cloned())
    }

    async fn insert(&self, submission: &TutorSubmission) -> BoardResult<TutorPostId> {
        let id = TutorPostId::new();
        let listing =
            TutorListing::from_submission(id, submission, ListingStatus::Pending, Utc::now());
        self.tutors.lock().await.push(listing);
        Ok(id)
    }

    async fn update(&self, id: TutorPostId, submission: &TutorSubmission) -> BoardResult<bool> {
        let mut tutors = self.tutors.lock().await;
        let Some(existing) = tutors.iter_mut().find(|l| l.id == id) else {
            return Ok(false);
        };
        *existing =
            TutorListing::from_submission(id, submission, existing.status, existing.created_at);
        Ok(true)
    }

    async fn delete(&self, id: TutorPostId) -> BoardResult<bool> {
        let mut tutors = self.tutors.lock().await;
        let before = tutors.len();
        tutors.retain(|l| l.id != id);
        Ok(tutors.len() != before)
    }

    async fn transition_status(
        &self,
        id: TutorPostId,
        expected: ListingStatus,
        next: ListingStatus,
    ) -> BoardResult<bool> {
        // Check and write under one lock
        let mut tutors = self.tutors.lock().await;
        match tutors.iter_mut().find(|l| l.id == id) {
            Some(listing) if listing.status == expected => {
                listing.status = next;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl DemandRepository for MemoryBoardRepository {
    async fn search(&self, criteria: &DemandCriteria) -> BoardResult<Vec<DemandListing>> {
        let demands = self.demands.lock().await;
        let matched: Vec<DemandListing> = demands
            .iter()
            .filter(|l| criteria.matches(l))
            .cloned()
            .collect();
        Ok(newest_first(&matched, |l| l.created_at))
    }

    async fn list(&self) -> BoardResult<Vec<DemandListing>> {
        let demands = self.demands.lock().await;
        Ok(newest_first(&demands, |l| l.created_at))
    }

    async fn find_by_id(&self, id: DemandPostId) -> BoardResult<Option<DemandListing>> {
        let demands = self.demands.lock().await;
        Ok(demands.iter().find(|l| l.id == id).cloned())
    }

    async fn insert(&self, submission: &DemandSubmission) -> BoardResult<DemandPostId> {
        let id = DemandPostId::new();
        let listing = DemandListing::from_submission(id, submission, Utc::now());
        self.demands.lock().await.push(listing);
        Ok(id)
    }

    async fn update(&self, id: DemandPostId, submission: &DemandSubmission) -> BoardResult<bool> {
        let mut demands = self.demands.lock().await;
        let Some(existing) = demands.iter_mut().find(|l| l.id == id) else {
            return Ok(false);
        };
        *existing = DemandListing::from_submission(id, submission, existing.created_at);
        Ok(true)
    }

    async fn delete(&self, id: DemandPostId) -> BoardResult<bool> {
        let mut demands = self.demands.lock().await;
        let before = demands.len();
        demands.retain(|l| l.id != id);
        Ok(demands.len() != before)
    }
}
