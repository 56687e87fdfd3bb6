//! Eligibility Rule Engine
//!
//! Decides which subjects may accompany a grade selection. Plain subjects are
//! always allowed; a phase wildcard ("小学全科", "初中全科", "高中全科") is
//! allowed only while at least one selected grade belongs to its phase.
//!
//! The same rules apply to tutor and parent submissions. Nothing here fails:
//! the functions only narrow the allowed set, and [`check_selection`] reports
//! the first subject that falls outside it.

use std::collections::BTreeSet;

use thiserror::Error;

use super::value_object::{Grade, Phase, Subject};

/// A selected subject whose phase is not covered by the selected grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("科目「{subject}」与所选年级不匹配")]
pub struct IneligibleSubject {
    pub subject: Subject,
}

/// Phases present in a selection of grade labels (either spelling)
pub fn phases_of_labels<'a, I>(grade_labels: I) -> BTreeSet<Phase>
where
    I: IntoIterator<Item = &'a str>,
{
    grade_labels.into_iter().filter_map(Phase::from_label).collect()
}

/// Phases present in a selection of grades
pub fn phases_of(grades: &[Grade]) -> BTreeSet<Phase> {
    grades.iter().map(Grade::phase).collect()
}

#[inline]
pub fn is_subject_allowed(subject: Subject, phases: &BTreeSet<Phase>) -> bool {
    match subject.wildcard_phase() {
        None => true,
        Some(phase) => phases.contains(&phase),
    }
}

/// Every subject that may be chosen for `grades`, in vocabulary order
pub fn eligible_subjects(grades: &[Grade]) -> Vec<Subject> {
    let phases = phases_of(grades);
    Subject::ALL
        .iter()
        .copied()
        .filter(|s| is_subject_allowed(*s, &phases))
        .collect()
}

/// Label-level filter over candidate subject labels.
///
/// Labels outside the vocabulary are not wildcards and pass through.
pub fn filter_subject_labels<'a, C, G>(candidates: C, grade_labels: G) -> Vec<&'a str>
where
    C: IntoIterator<Item = &'a str>,
    G: IntoIterator<Item = &'a str>,
{
    let phases = phases_of_labels(grade_labels);
    candidates
        .into_iter()
        .filter(|label| match Subject::parse(label) {
            Some(subject) => is_subject_allowed(subject, &phases),
            None => true,
        })
        .collect()
}

/// Drop the selected subjects that `grades` no longer allow.
///
/// Applying it twice with the same grades changes nothing.
pub fn retain_eligible(selected: &[Subject], grades: &[Grade]) -> Vec<Subject> {
    let phases = phases_of(grades);
    selected
        .iter()
        .copied()
        .filter(|s| is_subject_allowed(*s, &phases))
        .collect()
}

/// Write-time check: every selected subject must be allowed by `grades`
pub fn check_selection(grades: &[Grade], subjects: &[Subject]) -> Result<(), IneligibleSubject> {
    let phases = phases_of(grades);
    match subjects.iter().find(|s| !is_subject_allowed(**s, &phases)) {
        Some(subject) => Err(IneligibleSubject { subject: *subject }),
        None => Ok(()),
    }
}
