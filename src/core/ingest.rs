use serde_json::Value;

use crate::domain::{RefuelingEvent, RefuelingRecord};
use crate::errors::{FleetError, Result};

/// Parses a collaborator payload into normalized refueling events.
///
/// The only hard failure is a non-array payload; individual records that do
/// not deserialize are skipped with a warning so one bad row never aborts a
/// report.
pub fn parse_events(value: Value) -> Result<Vec<RefuelingEvent>> {
    let Value::Array(items) = value else {
        return Err(FleetError::InvalidInput(
            "refueling payload must be an array of records".into(),
        ));
    };
    let mut events = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<RefuelingRecord>(item) {
            Ok(record) => events.push(RefuelingEvent::from(record)),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed refueling record");
            }
        }
    }
    Ok(events)
}
