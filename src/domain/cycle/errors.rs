//! Cycle-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Rejections raised for degenerate cycle parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("Cycle length must be greater than zero, got {total_days}")]
    InvalidTotalDays { total_days: u32 },

    #[error("Day {day} is outside the cycle range 1..={total_days}")]
    DayOutOfRange { day: u32, total_days: u32 },

    #[error("Phases do not partition the cycle: {reason}")]
    MalformedPartition { reason: String },
}

impl CycleError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        CycleError::MalformedPartition {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CycleError::InvalidTotalDays { .. } => ErrorCode::InvalidCycleLength,
            CycleError::DayOutOfRange { .. } => ErrorCode::DayOutOfRange,
            CycleError::MalformedPartition { .. } => ErrorCode::MalformedPartition,
        }
    }
}

impl From<CycleError> for DomainError {
    fn from(err: CycleError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            CycleError::InvalidTotalDays { total_days } => {
                base.with_detail("total_days", total_days.to_string())
            }
            CycleError::DayOutOfRange { day, total_days } => base
                .with_detail("day", day.to_string())
                .with_detail("total_days", total_days.to_string()),
            CycleError::MalformedPartition { .. } => base,
        }
    }
}

/// Guards a cycle length.
pub(crate) fn ensure_total_days(total_days: u32) -> Result<(), CycleError> {
    if total_days == 0 {
        return Err(CycleError::InvalidTotalDays { total_days });
    }
    Ok(())
}

/// Guards a day number against `[1, total_days]`.
pub(crate) fn ensure_day_in_cycle(day: u32, total_days: u32) -> Result<(), CycleError> {
    ensure_total_days(total_days)?;
    if day == 0 || day > total_days {
        return Err(CycleError::DayOutOfRange { day, total_days });
    }
    Ok(())
}
