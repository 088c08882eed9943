use serde_json::Value;

use crate::core::aggregator::aggregate;
use crate::core::ingest::parse_events;
use crate::core::records::{EventQuery, RefuelingRecords};
use crate::domain::{FilterCriteria, FuelSummary, RefuelingEvent};

use super::ServiceResult;

/// Stateless reporting façade over the aggregation core.
pub struct ReportService;

impl ReportService {
    /// Computes the fleet summary for an in-memory event snapshot.
    pub fn fleet_summary(events: &[RefuelingEvent], criteria: &FilterCriteria) -> FuelSummary {
        aggregate(events, criteria)
    }

    /// Fetches every page of the query from the record collaborator and
    /// aggregates the resulting snapshot.
    pub fn scoped_summary(
        records: &dyn RefuelingRecords,
        query: &EventQuery,
    ) -> ServiceResult<FuelSummary> {
        let events = records.fetch_all(query)?;
        Ok(aggregate(&events, &query.criteria))
    }

    /// Parses a raw collaborator payload and aggregates it.
    pub fn ingest_summary(payload: Value, criteria: &FilterCriteria) -> ServiceResult<FuelSummary> {
        let events = parse_events(payload)?;
        Ok(aggregate(&events, criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use crate::domain::PeriodError;
    use crate::errors::FleetError;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn event(vehicle: &str, day: u32) -> RefuelingEvent {
        RefuelingEvent::new(vehicle, Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap())
    }

    #[test]
    fn fleet_summary_matches_direct_aggregation() {
        let events = vec![
            event("TRK-1", 1).with_odometer(1000.0).with_volume(50.0),
            event("TRK-1", 5).with_odometer(1500.0).with_volume(50.0),
        ];
        let summary = ReportService::fleet_summary(&events, &FilterCriteria::default());
        assert_eq!(summary.average_efficiency, 10.0);
    }

    #[test]
    fn invalid_period_blocks_query_construction() {
        let err = EventQuery::build(
            FilterCriteria::default(),
            Some("2026-02-10"),
            Some("2026-02-01"),
        )
        .unwrap_err();
        assert!(matches!(err, PeriodError::InvertedRange { .. }));
    }

    #[test]
    fn ingest_summary_rejects_non_list_payload() {
        let err =
            ReportService::ingest_summary(json!("not a list"), &FilterCriteria::default())
                .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Fleet(FleetError::InvalidInput(_))
        ));
    }
}
