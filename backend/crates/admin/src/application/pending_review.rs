//! Pending Review Use Case
//!
//! Lists tutor listings awaiting moderation together with short-lived links
//! to their verification documents.

use std::sync::Arc;

use board::domain::repository::TutorRepository;
use board::models::{ListingStatus, TutorListing};
use platform::storage::BlobStore;
use serde::Serialize;

use crate::application::config::AdminConfig;
use crate::error::AdminResult;

/// A pending listing with signed document links
#[derive(Debug, Clone, Serialize)]
pub struct PendingTutor {
    #[serde(flatten)]
    pub listing: TutorListing,
    /// Signed URLs for `auth_files`; files that could not be signed are left out
    pub cert_urls: Vec<String>,
}

/// Pending review use case
pub struct PendingReviewUseCase<R, S>
where
    R: TutorRepository,
    S: BlobStore,
{
    repo: Arc<R>,
    store: Arc<S>,
    config: Arc<AdminConfig>,
}

impl<R, S> PendingReviewUseCase<R, S>
where
    R: TutorRepository,
    S: BlobStore,
{
    pub fn new(repo: Arc<R>, store: Arc<S>, config: Arc<AdminConfig>) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }

    /// Pending listings, newest first
    pub async fn execute(&self) -> AdminResult<Vec<PendingTutor>> {
        let listings = self.repo.list(Some(ListingStatus::Pending)).await?;

        let mut pending = Vec::with_capacity(listings.len());
        for listing in listings {
            let cert_urls = self.sign_files(&listing).await;
            pending.push(PendingTutor { listing, cert_urls });
        }

        tracing::debug!(pending = pending.len(), "Pending tutor listings loaded");
        Ok(pending)
    }

    async fn sign_files(&self, listing: &TutorListing) -> Vec<String> {
        let mut urls = Vec::with_capacity(listing.auth_files.len());
        for path in &listing.auth_files {
            match self
                .store
                .signed_url(&self.config.verification_bucket, path, self.config.cert_url_ttl)
                .await
            {
                Ok(url) => urls.push(url),
                Err(e) => {
                    tracing::warn!(
                        tutor_post_id = %listing.id,
                        path = %path,
                        error = %e,
                        "Skipping verification file that could not be signed"
                    );
                }
            }
        }
        urls
    }
}
