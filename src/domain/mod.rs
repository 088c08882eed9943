pub mod filter;
pub mod period;
pub mod refueling;
pub mod summary;

pub use filter::FilterCriteria;
pub use period::{DateRange, PeriodError};
pub use refueling::{RefuelingEvent, RefuelingRecord, VehicleKey, UNIDENTIFIED_VEHICLE};
pub use summary::FuelSummary;
