//! Grade and Phase Value Objects
//!
//! Twelve school grades in three phases. Primary grades have two spellings
//! (full "小学一年级", short "小一"); junior and senior grades are spelled
//! identically in both forms.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::UnknownLabel;
use super::subject::Subject;

// ============================================================================
// Phase
// ============================================================================

/// School phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// 小学
    Primary,
    /// 初中
    Junior,
    /// 高中
    Senior,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Primary, Phase::Junior, Phase::Senior];

    /// Derive the phase of a grade label by its prefix.
    ///
    /// Works for both spellings: "小"/"小学" → primary, "初" → junior,
    /// "高" → senior. Anything else has no phase.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.starts_with('小') {
            Some(Phase::Primary)
        } else if label.starts_with('初') {
            Some(Phase::Junior)
        } else if label.starts_with('高') {
            Some(Phase::Senior)
        } else {
            None
        }
    }

    /// The phase-wide wildcard subject ("小学全科" etc.)
    #[inline]
    pub const fn wildcard(&self) -> Subject {
        match self {
            Phase::Primary => Subject::PrimaryAll,
            Phase::Junior => Subject::JuniorAll,
            Phase::Senior => Subject::SeniorAll,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Phase::Primary => "小学",
            Phase::Junior => "初中",
            Phase::Senior => "高中",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Grade
// ============================================================================

/// School grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    Primary1,
    Primary2,
    Primary3,
    Primary4,
    Primary5,
    Primary6,
    Junior1,
    Junior2,
    Junior3,
    Senior1,
    Senior2,
    Senior3,
}

impl Grade {
    /// Every grade, youngest first
    pub const ALL: [Grade; 12] = [
        Grade::Primary1,
        Grade::Primary2,
        Grade::Primary3,
        Grade::Primary4,
        Grade::Primary5,
        Grade::Primary6,
        Grade::Junior1,
        Grade::Junior2,
        Grade::Junior3,
        Grade::Senior1,
        Grade::Senior2,
        Grade::Senior3,
    ];

    /// Full label, as stored on tutor listings
    pub const fn full_label(&self) -> &'static str {
        match self {
            Grade::Primary1 => "小学一年级",
            Grade::Primary2 => "小学二年级",
            Grade::Primary3 => "小学三年级",
            Grade::Primary4 => "小学四年级",
            Grade::Primary5 => "小学五年级",
            Grade::Primary6 => "小学六年级",
            Grade::Junior1 => "初一",
            Grade::Junior2 => "初二",
            Grade::Junior3 => "初三",
            Grade::Senior1 => "高一",
            Grade::Senior2 => "高二",
            Grade::Senior3 => "高三",
        }
    }

    /// Short label, as used by board filters and demand listings
    pub const fn short_label(&self) -> &'static str {
        match self {
            Grade::Primary1 => "小一",
            Grade::Primary2 => "小二",
            Grade::Primary3 => "小三",
            Grade::Primary4 => "小四",
            Grade::Primary5 => "小五",
            Grade::Primary6 => "小六",
            other => other.full_label(),
        }
    }

    #[inline]
    pub const fn phase(&self) -> Phase {
        match self {
            Grade::Primary1
            | Grade::Primary2
            | Grade::Primary3
            | Grade::Primary4
            | Grade::Primary5
            | Grade::Primary6 => Phase::Primary,
            Grade::Junior1 | Grade::Junior2 | Grade::Junior3 => Phase::Junior,
            Grade::Senior1 | Grade::Senior2 | Grade::Senior3 => Phase::Senior,
        }
    }

    /// Parse either spelling
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.full_label() == raw || g.short_label() == raw)
    }
}

impl FromStr for Grade {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLabel::new("年级", s))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_label())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.full_label())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Cow::<'de, str>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
