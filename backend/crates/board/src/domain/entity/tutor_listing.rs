//! Tutor Listing Entity
//!
//! Three shapes of the same listing:
//! - [`TutorDraft`]: raw submission or edit, exactly as received
//! - [`TutorSubmission`]: a draft that passed every invariant; the only
//!   shape the repository writes
//! - [`TutorListing`]: a stored row, read back as persisted

use chrono::{DateTime, Utc};
use kernel::id::TutorPostId;
use serde::{Deserialize, Serialize};

use super::{normalize_text, parse_label_set, require_label};
use crate::domain::eligibility::check_selection;
use crate::domain::value_object::{
    Gender, Grade, Identity, ListingStatus, Phase, Region, SalaryRange, Subject, TeachMode,
    UNIVERSAL_WILDCARD,
};
use crate::error::{BoardError, BoardResult};

// ============================================================================
// Stored listing
// ============================================================================

/// A tutor listing as stored
///
/// Label columns are kept verbatim so rows written before a vocabulary change
/// still load and still match board filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorListing {
    pub id: TutorPostId,
    pub real_name: Option<String>,
    pub university: String,
    pub identity: String,
    pub teach_mode: String,
    pub gender: Option<String>,
    pub regions: Vec<String>,
    /// Full-form grade labels
    pub grades: Vec<String>,
    pub subjects: Vec<String>,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,
    pub note: Option<String>,
    /// Blob-store paths of the verification documents
    pub auth_files: Vec<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

impl TutorListing {
    /// Build the stored form of a freshly validated submission
    pub fn from_submission(
        id: TutorPostId,
        submission: &TutorSubmission,
        status: ListingStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            real_name: submission.real_name.clone(),
            university: submission.university.clone(),
            identity: submission.identity.label().to_string(),
            teach_mode: submission.teach_mode.label().to_string(),
            gender: submission.gender.map(|g| g.label().to_string()),
            regions: submission.region_labels(),
            grades: submission.grade_labels(),
            subjects: submission.subject_labels(),
            min_salary: submission.salary.min(),
            max_salary: submission.salary.max(),
            note: submission.note.clone(),
            auth_files: submission.auth_files.clone(),
            status,
            created_at,
        }
    }

    /// Grade filter: the exact full-form label is present
    pub fn teaches_grade(&self, grade: Grade) -> bool {
        self.grades.iter().any(|g| g == grade.full_label())
    }

    /// Subject filter.
    ///
    /// Matches the literal subject, the universal wildcard "全科", or the
    /// wildcard of `phase` when a grade filter supplied one.
    pub fn offers_subject(&self, subject: Subject, phase: Option<Phase>) -> bool {
        let phase_wildcard = phase.map(|p| p.wildcard().label());
        self.subjects.iter().any(|s| {
            s == subject.label() || s == UNIVERSAL_WILDCARD || Some(s.as_str()) == phase_wildcard
        })
    }

    /// Re-open the stored listing as an editable draft
    pub fn to_draft(&self) -> TutorDraft {
        TutorDraft {
            real_name: self.real_name.clone(),
            university: self.university.clone(),
            identity: self.identity.clone(),
            teach_mode: self.teach_mode.clone(),
            gender: self.gender.clone(),
            regions: self.regions.clone(),
            grades: self.grades.clone(),
            subjects: self.subjects.clone(),
            min_salary: self.min_salary.map(i64::from),
            max_salary: self.max_salary.map(i64::from),
            note: self.note.clone(),
            auth_files: self.auth_files.clone(),
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Unvalidated tutor submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TutorDraft {
    pub real_name: Option<String>,
    pub university: String,
    pub identity: String,
    pub teach_mode: String,
    pub gender: Option<String>,
    pub regions: Vec<String>,
    pub grades: Vec<String>,
    pub subjects: Vec<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub note: Option<String>,
    pub auth_files: Vec<String>,
}

impl TutorDraft {
    /// Check every listing invariant, in form order.
    ///
    /// Grades may use either spelling; they come back in full form,
    /// deduplicated, youngest first.
    pub fn validate(self) -> BoardResult<TutorSubmission> {
        let university = normalize_text(Some(self.university))
            .ok_or_else(|| BoardError::invalid("请选择院校"))?;
        let identity: Identity = require_label(&self.identity, "请选择身份")?;
        let teach_mode: TeachMode = require_label(&self.teach_mode, "请选择模式")?;

        match teach_mode {
            TeachMode::Offline if self.regions.is_empty() => {
                return Err(BoardError::invalid("请至少选择一个授课区域"));
            }
            TeachMode::Online if !self.regions.is_empty() => {
                return Err(BoardError::invalid("线上授课不需要选择区域"));
            }
            _ => {}
        }
        let regions: Vec<Region> = parse_label_set(&self.regions)?;

        let gender = match normalize_text(self.gender) {
            Some(raw) => Some(raw.parse::<Gender>()?),
            None => None,
        };

        if self.grades.is_empty() {
            return Err(BoardError::invalid("请至少选择一个年级"));
        }
        let grades: Vec<Grade> = parse_label_set(&self.grades)?;

        if self.subjects.is_empty() {
            return Err(BoardError::invalid("请至少选择一个科目"));
        }
        let subjects: Vec<Subject> = parse_label_set(&self.subjects)?;
        check_selection(&grades, &subjects)?;

        let salary = SalaryRange::new(self.min_salary, self.max_salary)?;

        let auth_files = self
            .auth_files
            .into_iter()
            .filter_map(|path| normalize_text(Some(path)))
            .collect();

        Ok(TutorSubmission {
            real_name: normalize_text(self.real_name),
            university,
            identity,
            teach_mode,
            gender,
            regions,
            grades,
            subjects,
            salary,
            note: normalize_text(self.note),
            auth_files,
        })
    }
}

// ============================================================================
// Validated submission
// ============================================================================

/// A tutor listing that satisfies every invariant
#[derive(Debug, Clone, PartialEq)]
pub struct TutorSubmission {
    pub real_name: Option<String>,
    pub university: String,
    pub identity: Identity,
    pub teach_mode: TeachMode,
    pub gender: Option<Gender>,
    /// Empty iff the mode is online
    pub regions: Vec<Region>,
    pub grades: Vec<Grade>,
    pub subjects: Vec<Subject>,
    pub salary: SalaryRange,
    pub note: Option<String>,
    pub auth_files: Vec<String>,
}

impl TutorSubmission {
    pub fn region_labels(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.label().to_string()).collect()
    }

    pub fn grade_labels(&self) -> Vec<String> {
        self.grades
            .iter()
            .map(|g| g.full_label().to_string())
            .collect()
    }

    pub fn subject_labels(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.label().to_string()).collect()
    }
}
