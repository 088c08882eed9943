use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder key for events missing both vehicle code and license plate.
///
/// Known limitation carried over from the data source: distinct unidentified
/// vehicles share this key and get merged into one ordering group.
pub const UNIDENTIFIED_VEHICLE: &str = "unidentified";

/// Grouping identity for refueling events: vehicle code when present,
/// license plate otherwise, the shared sentinel when both are missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleKey(String);

impl VehicleKey {
    pub fn derive(code: Option<&str>, plate: Option<&str>) -> Self {
        let pick = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let key = pick(code)
            .or_else(|| pick(plate))
            .unwrap_or_else(|| UNIDENTIFIED_VEHICLE.to_string());
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unidentified(&self) -> bool {
        self.0 == UNIDENTIFIED_VEHICLE
    }
}

impl std::fmt::Display for VehicleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wire shape handed over by the record collaborator, one fuel purchase per
/// record. Aliases follow the collaborator's camelCase payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefuelingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "vehicleCode", skip_serializing_if = "Option::is_none")]
    pub vehicle_code: Option<String>,
    #[serde(default, alias = "vehiclePlate", skip_serializing_if = "Option::is_none")]
    pub vehicle_plate: Option<String>,
    pub timestamp: String,
    #[serde(default, alias = "odometerReading", skip_serializing_if = "Option::is_none")]
    pub odometer_reading: Option<f64>,
    #[serde(default, alias = "volumePurchased", skip_serializing_if = "Option::is_none")]
    pub volume_purchased: Option<f64>,
    #[serde(default, alias = "totalAmountPaid", skip_serializing_if = "Option::is_none")]
    pub total_amount_paid: Option<f64>,
    #[serde(
        default,
        alias = "averageEfficiencyReported",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_efficiency_reported: Option<f64>,
}

/// Normalized refueling event the engine computes over.
///
/// Every optional source field stays optional here; normalization only
/// collapses values the aggregation must never see (negative or non-finite
/// numerics) into absence. Events are read-only inputs: the engine neither
/// creates nor mutates them once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefuelingEvent {
    pub id: String,
    pub vehicle_key: VehicleKey,
    /// Parse result of the source timestamp. `None` keeps the event in the
    /// volume/spend totals while excluding it from odometer ordering.
    pub recorded_at: Option<DateTime<Utc>>,
    pub odometer_reading: Option<f64>,
    pub volume_purchased: Option<f64>,
    pub total_amount_paid: Option<f64>,
    pub average_efficiency_reported: Option<f64>,
}

impl RefuelingEvent {
    pub fn new(vehicle: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        let vehicle = vehicle.into();
        Self {
            id: Uuid::new_v4().to_string(),
            vehicle_key: VehicleKey::derive(Some(&vehicle), None),
            recorded_at: Some(recorded_at),
            odometer_reading: None,
            volume_purchased: None,
            total_amount_paid: None,
            average_efficiency_reported: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_odometer(mut self, reading: f64) -> Self {
        self.odometer_reading = Some(reading);
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume_purchased = Some(volume);
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.total_amount_paid = Some(amount);
        self
    }

    pub fn with_reported_efficiency(mut self, efficiency: f64) -> Self {
        self.average_efficiency_reported = Some(efficiency);
        self
    }

    /// Normalizes a raw collaborator record, applying the sanity filter.
    pub fn from_record(record: RefuelingRecord) -> Self {
        let recorded_at = parse_timestamp(&record.timestamp);
        if recorded_at.is_none() {
            tracing::debug!(
                timestamp = %record.timestamp,
                "refueling timestamp failed to parse; event excluded from ordering"
            );
        }
        Self {
            id: record
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            vehicle_key: VehicleKey::derive(
                record.vehicle_code.as_deref(),
                record.vehicle_plate.as_deref(),
            ),
            recorded_at,
            odometer_reading: sanitize_non_negative(record.odometer_reading),
            volume_purchased: sanitize_positive(record.volume_purchased),
            total_amount_paid: sanitize_non_negative(record.total_amount_paid),
            average_efficiency_reported: sanitize_positive(record.average_efficiency_reported),
        }
    }
}

impl From<RefuelingRecord> for RefuelingEvent {
    fn from(record: RefuelingRecord) -> Self {
        Self::from_record(record)
    }
}

fn sanitize_non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite() && *value >= 0.0)
}

fn sanitize_positive(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite() && *value > 0.0)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}
