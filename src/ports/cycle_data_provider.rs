//! Cycle Data Provider Port - where cycle snapshots and health readings come from.
//!
//! Given a date, a provider returns the cycle as it stands that day along
//! with the day's health readings. The bundled adapter serves fixed sample
//! data; a device- or service-backed adapter would implement the same trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::cycle::{CycleError, CycleState};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::health::{HealthSnapshot, HormoneLevel};

/// Errors that can occur while reading from a data source
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("No cycle data for {0}")]
    NoData(NaiveDate),

    #[error("Data source returned invalid data: {0}")]
    InvalidData(String),

    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

impl From<CycleError> for ProviderError {
    fn from(err: CycleError) -> Self {
        ProviderError::InvalidData(err.to_string())
    }
}

impl From<ValidationError> for ProviderError {
    fn from(err: ValidationError) -> Self {
        ProviderError::InvalidData(err.to_string())
    }
}

impl From<ProviderError> for DomainError {
    fn from(err: ProviderError) -> Self {
        let code = match &err {
            ProviderError::NoData(_) => ErrorCode::NoCycleData,
            ProviderError::InvalidData(_) | ProviderError::Unavailable(_) => {
                ErrorCode::ProviderError
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for per-day cycle and health data
#[async_trait]
pub trait CycleDataProvider: Send + Sync {
    /// The cycle snapshot for `date`.
    ///
    /// # Errors
    /// `ProviderError::NoData` if nothing is known about `date`
    async fn cycle_state(&self, date: NaiveDate) -> Result<CycleState, ProviderError>;

    /// Health metrics recorded for `date`.
    async fn health_snapshot(&self, date: NaiveDate) -> Result<HealthSnapshot, ProviderError>;

    /// Estimated hormone levels for `date`.
    async fn hormone_levels(&self, date: NaiveDate) -> Result<Vec<HormoneLevel>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyProvider;

    #[async_trait]
    impl CycleDataProvider for EmptyProvider {
        async fn cycle_state(&self, date: NaiveDate) -> Result<CycleState, ProviderError> {
            Err(ProviderError::NoData(date))
        }

        async fn health_snapshot(&self, _date: NaiveDate) -> Result<HealthSnapshot, ProviderError> {
            Ok(HealthSnapshot::default())
        }

        async fn hormone_levels(&self, _date: NaiveDate) -> Result<Vec<HormoneLevel>, ProviderError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_provider_trait_is_object_safe() {
        let _provider: Box<dyn CycleDataProvider> = Box::new(EmptyProvider);
    }

    #[tokio::test]
    async fn test_missing_day_reports_no_data() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let result = EmptyProvider.cycle_state(date).await;
        assert_eq!(result, Err(ProviderError::NoData(date)));
    }

    #[test]
    fn test_cycle_error_becomes_invalid_data() {
        let err: ProviderError = CycleError::InvalidTotalDays { total_days: 0 }.into();
        assert!(matches!(err, ProviderError::InvalidData(_)));
    }

    #[test]
    fn test_error_messages() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(ProviderError::NoData(date).to_string(), "No cycle data for 2024-06-10");

        let err: DomainError = ProviderError::NoData(date).into();
        assert_eq!(err.code, ErrorCode::NoCycleData);
    }
}
