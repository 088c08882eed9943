pub mod aggregator;
pub mod ingest;
pub mod records;
pub mod sequencer;
pub mod services;

pub use aggregator::aggregate;
pub use ingest::parse_events;
pub use records::{EventPage, EventQuery, RefuelingRecords};
pub use sequencer::ReportSequencer;
pub use services::ReportService;
