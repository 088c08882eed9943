use thiserror::Error;

use crate::domain::period::PeriodError;

/// Unified error type for the aggregation core and its collaborator
/// boundaries.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Period(#[from] PeriodError),
    #[error("Record source error: {0}")]
    Records(String),
}

pub type Result<T> = std::result::Result<T, FleetError>;
