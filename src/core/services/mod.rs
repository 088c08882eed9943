pub mod report_service;

pub use report_service::ReportService;

use crate::domain::PeriodError;
use crate::errors::FleetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Fleet(#[from] FleetError),
    #[error(transparent)]
    Period(#[from] PeriodError),
}
