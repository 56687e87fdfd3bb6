//! Moderation Actions

use board::models::ListingStatus;
use derive_more::Display;

/// Reviewer decision on a pending tutor listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ModerationAction {
    #[display("approve")]
    Approve,
    #[display("reject")]
    Reject,
}

impl ModerationAction {
    /// Only pending listings can be moderated
    pub const FROM: ListingStatus = ListingStatus::Pending;

    /// Parse the wire form
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }

    /// Status written on success
    pub const fn target_status(&self) -> ListingStatus {
        match self {
            Self::Approve => ListingStatus::Verified,
            Self::Reject => ListingStatus::Rejected,
        }
    }
}
