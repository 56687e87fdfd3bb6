//! Salary Range Value Object
//!
//! Hourly salary (tutor) or budget (parent) bounds, in yuan. Either bound may
//! be absent; when both are present `min <= max`.

use serde::Serialize;
use thiserror::Error;

/// Salary validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SalaryError {
    #[error("薪资不能为负数")]
    Negative,

    #[error("薪资超出有效范围")]
    OutOfRange,

    #[error("最低薪资不能大于最高薪资")]
    Inverted,
}

/// Validated salary range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SalaryRange {
    min: Option<i32>,
    max: Option<i32>,
}

impl SalaryRange {
    /// Validate raw bounds
    pub fn new(min: Option<i64>, max: Option<i64>) -> Result<Self, SalaryError> {
        let min = min.map(Self::bound).transpose()?;
        let max = max.map(Self::bound).transpose()?;

        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(SalaryError::Inverted);
            }
        }

        Ok(Self { min, max })
    }

    fn bound(value: i64) -> Result<i32, SalaryError> {
        if value < 0 {
            return Err(SalaryError::Negative);
        }
        i32::try_from(value).map_err(|_| SalaryError::OutOfRange)
    }

    #[inline]
    pub fn min(&self) -> Option<i32> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Option<i32> {
        self.max
    }
}
