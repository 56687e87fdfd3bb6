//! Subject Value Object

use super::grade::Phase;

/// Universal wildcard. Never offered for selection, but recognised on
/// stored tutor subject sets when matching board filters.
pub const UNIVERSAL_WILDCARD: &str = "全科";

vocabulary! {
    /// Teaching subject
    pub enum Subject: "科目" {
        Math => "数学",
        Chinese => "语文",
        English => "英语",
        Physics => "物理",
        Chemistry => "化学",
        Biology => "生物",
        Geography => "地理",
        History => "历史",
        Politics => "政治",
        /// Every primary subject
        PrimaryAll => "小学全科",
        /// Every junior-secondary subject
        JuniorAll => "初中全科",
        /// Every senior-secondary subject
        SeniorAll => "高中全科",
        Other => "其他",
    }
}

impl Subject {
    /// The phase a wildcard subject is bound to; `None` for plain subjects
    #[inline]
    pub const fn wildcard_phase(&self) -> Option<Phase> {
        match self {
            Subject::PrimaryAll => Some(Phase::Primary),
            Subject::JuniorAll => Some(Phase::Junior),
            Subject::SeniorAll => Some(Phase::Senior),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_phase_wildcard(&self) -> bool {
        self.wildcard_phase().is_some()
    }
}
