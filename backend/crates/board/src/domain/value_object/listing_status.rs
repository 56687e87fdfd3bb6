//! Listing Status Value Object
//!
//! Moderation state of a tutor listing. Demand listings carry no status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation status of a tutor listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Awaiting review; already visible on the board
    #[default]
    Pending,
    /// Approved by an admin
    Verified,
    /// Rejected by an admin; hidden from the board
    Rejected,
}

impl ListingStatus {
    /// Statuses shown on the public board
    pub const BOARD_VISIBLE: [ListingStatus; 2] = [ListingStatus::Pending, ListingStatus::Verified];

    /// Get string code for database storage
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(Self::Pending),
            "verified" => Some(Self::Verified),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_board_visible(&self) -> bool {
        matches!(self, Self::Pending | Self::Verified)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
