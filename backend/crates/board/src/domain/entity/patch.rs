//! Admin Edits
//!
//! Typed partial updates. A patch is applied to the draft form of the stored
//! listing and the result is validated again, so an edit can never produce a
//! listing that a fresh submission could not.
//!
//! Nullable columns use `Option<Option<T>>`: a missing key leaves the value
//! alone, an explicit `null` clears it.

use serde::{Deserialize, Deserializer};

use super::{DemandDraft, TutorDraft};

fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial edit of a tutor listing. Moderation status is not editable here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TutorPatch {
    #[serde(default, deserialize_with = "nullable")]
    pub real_name: Option<Option<String>>,
    pub university: Option<String>,
    pub identity: Option<String>,
    pub teach_mode: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub gender: Option<Option<String>>,
    pub regions: Option<Vec<String>>,
    pub grades: Option<Vec<String>>,
    pub subjects: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub min_salary: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub max_salary: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub note: Option<Option<String>>,
    pub auth_files: Option<Vec<String>>,
}

impl TutorPatch {
    pub fn is_empty(&self) -> bool {
        self.real_name.is_none()
            && self.university.is_none()
            && self.identity.is_none()
            && self.teach_mode.is_none()
            && self.gender.is_none()
            && self.regions.is_none()
            && self.grades.is_none()
            && self.subjects.is_none()
            && self.min_salary.is_none()
            && self.max_salary.is_none()
            && self.note.is_none()
            && self.auth_files.is_none()
    }

    pub fn apply(self, draft: &mut TutorDraft) {
        if let Some(v) = self.real_name {
            draft.real_name = v;
        }
        if let Some(v) = self.university {
            draft.university = v;
        }
        if let Some(v) = self.identity {
            draft.identity = v;
        }
        if let Some(v) = self.teach_mode {
            draft.teach_mode = v;
        }
        if let Some(v) = self.gender {
            draft.gender = v;
        }
        if let Some(v) = self.regions {
            draft.regions = v;
        }
        if let Some(v) = self.grades {
            draft.grades = v;
        }
        if let Some(v) = self.subjects {
            draft.subjects = v;
        }
        if let Some(v) = self.min_salary {
            draft.min_salary = v;
        }
        if let Some(v) = self.max_salary {
            draft.max_salary = v;
        }
        if let Some(v) = self.note {
            draft.note = v;
        }
        if let Some(v) = self.auth_files {
            draft.auth_files = v;
        }
    }
}

/// Partial edit of a demand listing.
///
/// `student_grade` and `subject` take the stored "、"-joined form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemandPatch {
    pub teach_mode: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub region: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub detail_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub gender: Option<Option<String>>,
    pub student_grade: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub subject: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub min_salary: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub max_salary: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub note: Option<Option<String>>,
}

impl DemandPatch {
    pub fn is_empty(&self) -> bool {
        self.teach_mode.is_none()
            && self.region.is_none()
            && self.detail_address.is_none()
            && self.gender.is_none()
            && self.student_grade.is_none()
            && self.subject.is_none()
            && self.min_salary.is_none()
            && self.max_salary.is_none()
            && self.note.is_none()
    }

    pub fn apply(self, draft: &mut DemandDraft) {
        use super::demand_listing::split_multi;

        if let Some(v) = self.teach_mode {
            draft.teach_mode = v;
        }
        if let Some(v) = self.region {
            draft.region = v;
        }
        if let Some(v) = self.detail_address {
            draft.detail_address = v;
        }
        if let Some(v) = self.gender {
            draft.gender = v;
        }
        if let Some(v) = self.student_grade {
            draft.grades = split_multi(Some(&v));
        }
        if let Some(v) = self.subject {
            draft.subjects = split_multi(v.as_deref());
        }
        if let Some(v) = self.min_salary {
            draft.min_salary = v;
        }
        if let Some(v) = self.max_salary {
            draft.max_salary = v;
        }
        if let Some(v) = self.note {
            draft.note = v;
        }
    }
}
