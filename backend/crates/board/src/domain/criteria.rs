//! Board Filter Criteria
//!
//! Raw query strings are parsed once into typed criteria. Empty parameters
//! count as absent; unknown keys, unknown labels and malformed salary bounds
//! are rejected.
//!
//! Tutor criteria split into a pushdown part the persistence layer evaluates
//! (mode, region containment, salary bounds, visible statuses) and a post
//! filter for what it cannot express (grade spelling, subject wildcards).

use serde::Deserialize;

use super::entity::{DemandListing, TutorListing};
use super::value_object::{Grade, ListingStatus, MULTI_VALUE_DELIMITER, Region, Subject, TeachMode};
use crate::error::{BoardError, BoardResult};

// ============================================================================
// Raw query strings
// ============================================================================

/// `GET /api/board/tutors` query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TutorQuery {
    pub region: Option<String>,
    pub grade: Option<String>,
    pub subject: Option<String>,
    pub mode: Option<String>,
    pub min_salary: Option<String>,
    pub max_salary: Option<String>,
}

/// `GET /api/board/demands` query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemandQuery {
    pub region: Option<String>,
    pub grade: Option<String>,
    pub subject: Option<String>,
    pub mode: Option<String>,
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_opt<T>(raw: &Option<String>) -> BoardResult<Option<T>>
where
    T: std::str::FromStr<Err = super::value_object::UnknownLabel>,
{
    match present(raw) {
        Some(s) => Ok(Some(s.parse()?)),
        None => Ok(None),
    }
}

fn parse_bound(raw: &Option<String>, name: &str) -> BoardResult<Option<i32>> {
    match present(raw) {
        Some(s) => s
            .parse::<i32>()
            .ok()
            .filter(|v| *v >= 0)
            .map(Some)
            .ok_or_else(|| BoardError::invalid(format!("{name} 必须是非负整数"))),
        None => Ok(None),
    }
}

/// Validate every "、"-separated segment with `check`, keep the literal
fn literal_multi<F>(raw: &Option<String>, check: F) -> BoardResult<Option<String>>
where
    F: Fn(&str) -> BoardResult<()>,
{
    match present(raw) {
        Some(s) => {
            for segment in s.split(MULTI_VALUE_DELIMITER) {
                check(segment)?;
            }
            Ok(Some(s.to_string()))
        }
        None => Ok(None),
    }
}

// ============================================================================
// Tutor criteria
// ============================================================================

/// Predicates handed to the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TutorPushdown {
    pub mode: Option<TeachMode>,
    /// Set containment on the listing's regions
    pub region: Option<Region>,
    /// `listing.min_salary >= bound`
    pub min_salary: Option<i32>,
    /// `listing.max_salary <= bound`
    pub max_salary: Option<i32>,
}

impl TutorPushdown {
    /// Statuses the board shows
    pub const STATUSES: [ListingStatus; 2] = ListingStatus::BOARD_VISIBLE;

    /// Reference evaluation, with SQL semantics for absent salaries
    pub fn admits(&self, listing: &TutorListing) -> bool {
        listing.status.is_board_visible()
            && self.mode.is_none_or(|m| listing.teach_mode == m.label())
            && self
                .region
                .is_none_or(|r| listing.regions.iter().any(|x| x == r.label()))
            && self
                .min_salary
                .is_none_or(|b| listing.min_salary.is_some_and(|v| v >= b))
            && self
                .max_salary
                .is_none_or(|b| listing.max_salary.is_some_and(|v| v <= b))
    }
}

/// Typed tutor board filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TutorCriteria {
    pub region: Option<Region>,
    pub grade: Option<Grade>,
    pub subject: Option<Subject>,
    pub mode: Option<TeachMode>,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,
}

impl TutorCriteria {
    pub fn parse(query: &TutorQuery) -> BoardResult<Self> {
        let criteria = Self {
            region: parse_opt(&query.region)?,
            grade: parse_opt(&query.grade)?,
            subject: parse_opt(&query.subject)?,
            mode: parse_opt(&query.mode)?,
            min_salary: parse_bound(&query.min_salary, "min_salary")?,
            max_salary: parse_bound(&query.max_salary, "max_salary")?,
        };

        if let (Some(lo), Some(hi)) = (criteria.min_salary, criteria.max_salary) {
            if lo > hi {
                return Err(BoardError::invalid("min_salary 不能大于 max_salary"));
            }
        }

        Ok(criteria)
    }

    pub fn pushdown(&self) -> TutorPushdown {
        TutorPushdown {
            mode: self.mode,
            region: self.region,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
        }
    }

    /// Grade and subject matching the persistence layer cannot express
    pub fn post_filter(&self, listing: &TutorListing) -> bool {
        let grade_ok = self.grade.is_none_or(|g| listing.teaches_grade(g));
        let subject_ok = self
            .subject
            .is_none_or(|s| listing.offers_subject(s, self.grade.map(|g| g.phase())));
        grade_ok && subject_ok
    }

    /// Full board predicate
    pub fn matches(&self, listing: &TutorListing) -> bool {
        self.pushdown().admits(listing) && self.post_filter(listing)
    }
}

// ============================================================================
// Demand criteria
// ============================================================================

/// Typed demand board filter. Every predicate is literal equality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemandCriteria {
    pub mode: Option<TeachMode>,
    pub region: Option<Region>,
    /// Compared literally against `student_grade`
    pub grade: Option<String>,
    /// Compared literally against `subject`
    pub subject: Option<String>,
}

impl DemandCriteria {
    pub fn parse(query: &DemandQuery) -> BoardResult<Self> {
        Ok(Self {
            mode: parse_opt(&query.mode)?,
            region: parse_opt(&query.region)?,
            grade: literal_multi(&query.grade, |seg| {
                seg.parse::<Grade>().map(|_| ()).map_err(Into::into)
            })?,
            subject: literal_multi(&query.subject, |seg| {
                seg.parse::<Subject>().map(|_| ()).map_err(Into::into)
            })?,
        })
    }

    /// Reference evaluation
    pub fn matches(&self, listing: &DemandListing) -> bool {
        self.mode.is_none_or(|m| listing.teach_mode == m.label())
            && self
                .region
                .is_none_or(|r| listing.region.as_deref() == Some(r.label()))
            && self
                .grade
                .as_deref()
                .is_none_or(|g| listing.student_grade.as_deref() == Some(g))
            && self
                .subject
                .as_deref()
                .is_none_or(|s| listing.subject.as_deref() == Some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::TutorDraft;
    use chrono::Utc;
    use kernel::id::TutorPostId;

    fn tutor(grades: &[&str], subjects: &[&str]) -> TutorListing {
        let submission = TutorDraft {
            university: "合肥工业大学".to_string(),
            identity: "研究生".to_string(),
            teach_mode: "线上".to_string(),
            grades: vec!["初一".to_string()],
            subjects: vec!["数学".to_string()],
            ..TutorDraft::default()
        }
        .validate()
        .unwrap();
        let mut listing = TutorListing::from_submission(
            TutorPostId::new(),
            &submission,
            ListingStatus::Pending,
            Utc::now(),
        );
        listing.grades = grades.iter().map(|s| s.to_string()).collect();
        listing.subjects = subjects.iter().map(|s| s.to_string()).collect();
        listing
    }

    fn query(grade: &str, subject: &str) -> TutorQuery {
        TutorQuery {
            grade: Some(grade.to_string()),
            subject: Some(subject.to_string()),
            ..TutorQuery::default()
        }
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let criteria = TutorCriteria::parse(&TutorQuery {
            region: Some(String::new()),
            min_salary: Some("  ".to_string()),
            ..TutorQuery::default()
        })
        .unwrap();
        assert_eq!(criteria, TutorCriteria::default());
    }

    #[test]
    fn test_malformed_criteria_rejected() {
        let bad_region = TutorQuery {
            region: Some("朝阳区".to_string()),
            ..TutorQuery::default()
        };
        assert!(TutorCriteria::parse(&bad_region).is_err());

        let negative = TutorQuery {
            min_salary: Some("-5".to_string()),
            ..TutorQuery::default()
        };
        assert!(TutorCriteria::parse(&negative).is_err());

        let not_a_number = TutorQuery {
            max_salary: Some("abc".to_string()),
            ..TutorQuery::default()
        };
        assert!(TutorCriteria::parse(&not_a_number).is_err());

        let inverted = TutorQuery {
            min_salary: Some("200".to_string()),
            max_salary: Some("100".to_string()),
            ..TutorQuery::default()
        };
        assert!(TutorCriteria::parse(&inverted).is_err());
    }

    #[test]
    fn test_phase_wildcard_scenario() {
        let criteria = TutorCriteria::parse(&query("初一", "数学")).unwrap();
        let wildcard = tutor(&["初一"], &["初中全科"]);
        let english_only = tutor(&["初一"], &["英语"]);

        assert!(criteria.post_filter(&wildcard));
        assert!(!criteria.post_filter(&english_only));
    }

    #[test]
    fn test_short_grade_matches_full_label() {
        let criteria = TutorCriteria::parse(&query("小三", "数学")).unwrap();
        assert!(criteria.post_filter(&tutor(&["小学三年级"], &["小学全科"])));
        assert!(!criteria.post_filter(&tutor(&["小学四年级"], &["数学"])));
    }

    #[test]
    fn test_wildcard_needs_grade_filter() {
        let criteria = TutorCriteria::parse(&TutorQuery {
            subject: Some("数学".to_string()),
            ..TutorQuery::default()
        })
        .unwrap();
        assert!(!criteria.post_filter(&tutor(&["初一"], &["初中全科"])));
        assert!(criteria.post_filter(&tutor(&["初一"], &["全科"])));
    }

    #[test]
    fn test_pushdown_semantics() {
        let mut listing = tutor(&["初一"], &["数学"]);
        listing.teach_mode = "合肥线下".to_string();
        listing.regions = vec!["蜀山区".to_string(), "政务区".to_string()];
        listing.min_salary = Some(100);
        listing.max_salary = None;

        let pushdown = TutorPushdown {
            mode: Some(TeachMode::Offline),
            region: Some(Region::Zhengwu),
            min_salary: Some(80),
            max_salary: None,
        };
        assert!(pushdown.admits(&listing));

        let with_max = TutorPushdown {
            max_salary: Some(300),
            ..pushdown
        };
        assert!(!with_max.admits(&listing), "absent max_salary never satisfies a bound");

        listing.status = ListingStatus::Rejected;
        assert!(!pushdown.admits(&listing));
    }

    #[test]
    fn test_demand_criteria_literal() {
        let criteria = DemandCriteria::parse(&DemandQuery {
            grade: Some("小一、小二".to_string()),
            ..DemandQuery::default()
        })
        .unwrap();
        assert_eq!(criteria.grade.as_deref(), Some("小一、小二"));

        let bad = DemandQuery {
            subject: Some("数学、美术".to_string()),
            ..DemandQuery::default()
        };
        assert!(DemandCriteria::parse(&bad).is_err());
    }

    #[test]
    fn test_unknown_query_keys_rejected() {
        let parsed: Result<TutorQuery, _> =
            serde_json::from_value(serde_json::json!({"region": "蜀山区", "page": "2"}));
        assert!(parsed.is_err());
    }
}
