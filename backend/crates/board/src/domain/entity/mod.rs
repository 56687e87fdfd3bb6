//! Entities
//!
//! Listings in their stored, draft and validated shapes, plus the typed
//! partial edits admins may apply to them.

pub mod demand_listing;
pub mod patch;
pub mod tutor_listing;

pub use demand_listing::{DemandDraft, DemandListing, DemandSubmission};
pub use patch::{DemandPatch, TutorPatch};
pub use tutor_listing::{TutorDraft, TutorListing, TutorSubmission};

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::domain::value_object::UnknownLabel;
use crate::error::{BoardError, BoardResult};

/// Trim free text; blank means absent
pub(crate) fn normalize_text(raw: Option<String>) -> Option<String> {
    raw.and_then(|s| platform::config::non_empty(&s))
}

/// Parse a required single label; blank yields `missing`
pub(crate) fn require_label<T>(raw: &str, missing: &'static str) -> BoardResult<T>
where
    T: FromStr<Err = UnknownLabel>,
{
    if raw.trim().is_empty() {
        return Err(BoardError::invalid(missing));
    }
    Ok(raw.parse()?)
}

/// Parse a label set: deduplicated, in vocabulary order
pub(crate) fn parse_label_set<T>(raw: &[String]) -> BoardResult<Vec<T>>
where
    T: FromStr<Err = UnknownLabel> + Ord,
{
    let set = raw
        .iter()
        .map(|label| label.parse::<T>())
        .collect::<Result<BTreeSet<T>, _>>()?;
    Ok(set.into_iter().collect())
}
