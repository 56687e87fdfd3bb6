//! Demand Listing Entity
//!
//! A parent's request for a tutor. Demand listings have no moderation status
//! and are visible as soon as they are written. Grades and subjects are kept
//! as "、"-delimited strings, and board filters compare them literally.

use chrono::{DateTime, Utc};
use kernel::id::DemandPostId;
use serde::{Deserialize, Serialize};

use super::{normalize_text, parse_label_set, require_label};
use crate::domain::eligibility::check_selection;
use crate::domain::value_object::{
    Gender, Grade, MULTI_VALUE_DELIMITER, Region, SalaryRange, Subject, TeachMode,
};
use crate::error::{BoardError, BoardResult};

// ============================================================================
// Stored listing
// ============================================================================

/// A demand listing as stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandListing {
    pub id: DemandPostId,
    pub teach_mode: String,
    pub region: Option<String>,
    pub detail_address: Option<String>,
    /// Gender of the student
    pub gender: Option<String>,
    /// "、"-joined subject labels; `None` when no subject was chosen
    pub subject: Option<String>,
    /// "、"-joined short grade labels
    pub student_grade: Option<String>,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DemandListing {
    pub fn from_submission(
        id: DemandPostId,
        submission: &DemandSubmission,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            teach_mode: submission.teach_mode.label().to_string(),
            region: submission.region.map(|r| r.label().to_string()),
            detail_address: submission.detail_address.clone(),
            gender: Some(submission.gender.label().to_string()),
            subject: submission.subject(),
            student_grade: Some(submission.student_grade()),
            min_salary: submission.salary.min(),
            max_salary: submission.salary.max(),
            note: submission.note.clone(),
            created_at,
        }
    }

    /// Re-open the stored listing as an editable draft
    pub fn to_draft(&self) -> DemandDraft {
        DemandDraft {
            teach_mode: self.teach_mode.clone(),
            region: self.region.clone(),
            detail_address: self.detail_address.clone(),
            gender: self.gender.clone(),
            grades: split_multi(self.student_grade.as_deref()),
            subjects: split_multi(self.subject.as_deref()),
            min_salary: self.min_salary.map(i64::from),
            max_salary: self.max_salary.map(i64::from),
            note: self.note.clone(),
        }
    }
}

/// Split a "、"-delimited field into its segments
pub fn split_multi(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(MULTI_VALUE_DELIMITER)
            .map(str::trim)
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

// ============================================================================
// Draft
// ============================================================================

/// Unvalidated parent submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemandDraft {
    pub teach_mode: String,
    pub region: Option<String>,
    pub detail_address: Option<String>,
    pub gender: Option<String>,
    pub grades: Vec<String>,
    pub subjects: Vec<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub note: Option<String>,
}

impl DemandDraft {
    /// Check every listing invariant, in form order.
    ///
    /// An empty subject list is allowed and stored as no subject.
    pub fn validate(self) -> BoardResult<DemandSubmission> {
        let teach_mode: TeachMode = require_label(&self.teach_mode, "请选择模式")?;

        let region = normalize_text(self.region);
        let detail_address = normalize_text(self.detail_address);
        let region = match teach_mode {
            TeachMode::Offline => {
                let region = region
                    .ok_or_else(|| BoardError::invalid("请选择授课区域（合肥九区三县）"))?
                    .parse::<Region>()?;
                if detail_address.is_none() {
                    return Err(BoardError::invalid("请填写精确地址（具体到小区或街道）"));
                }
                Some(region)
            }
            TeachMode::Online => {
                if region.is_some() || detail_address.is_some() {
                    return Err(BoardError::invalid("线上授课不需要填写区域和地址"));
                }
                None
            }
        };

        if self.grades.is_empty() {
            return Err(BoardError::invalid("请至少选择一个年级"));
        }
        let grades: Vec<Grade> = parse_label_set(&self.grades)?;

        let gender: Gender = require_label(self.gender.as_deref().unwrap_or(""), "请选择小孩性别")?;

        let subjects: Vec<Subject> = parse_label_set(&self.subjects)?;
        check_selection(&grades, &subjects)?;

        let salary = SalaryRange::new(self.min_salary, self.max_salary)?;

        Ok(DemandSubmission {
            teach_mode,
            region,
            detail_address,
            gender,
            grades,
            subjects,
            salary,
            note: normalize_text(self.note),
        })
    }
}

// ============================================================================
// Validated submission
// ============================================================================

/// A demand listing that satisfies every invariant
#[derive(Debug, Clone, PartialEq)]
pub struct DemandSubmission {
    pub teach_mode: TeachMode,
    /// Present iff the mode is offline
    pub region: Option<Region>,
    /// Present iff the mode is offline
    pub detail_address: Option<String>,
    pub gender: Gender,
    pub grades: Vec<Grade>,
    pub subjects: Vec<Subject>,
    pub salary: SalaryRange,
    pub note: Option<String>,
}

impl DemandSubmission {
    /// Grades in short form, "、"-joined
    pub fn student_grade(&self) -> String {
        self.grades
            .iter()
            .map(Grade::short_label)
            .collect::<Vec<_>>()
            .join(MULTI_VALUE_DELIMITER)
    }

    /// Subjects "、"-joined, or `None` when no subject was chosen
    pub fn subject(&self) -> Option<String> {
        if self.subjects.is_empty() {
            return None;
        }
        Some(
            self.subjects
                .iter()
                .map(Subject::label)
                .collect::<Vec<_>>()
                .join(MULTI_VALUE_DELIMITER),
        )
    }
}
