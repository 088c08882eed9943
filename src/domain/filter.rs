use serde::{Deserialize, Serialize};

use super::period::DateRange;
use super::refueling::RefuelingEvent;

/// Immutable filter snapshot applied to an event set before aggregation.
///
/// The UI layer owns debouncing and re-invocation; the engine only receives
/// the resulting criteria value alongside the event snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<DateRange>,
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = Some(vehicle.into());
        self
    }

    pub fn with_period(mut self, period: DateRange) -> Self {
        self.period = Some(period);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.vehicle.is_none() && self.period.is_none()
    }

    /// Decides whether an event stays visible under these criteria.
    pub fn matches(&self, event: &RefuelingEvent) -> bool {
        if let Some(search) = normalized(self.search.as_deref()) {
            let needle = search.to_lowercase();
            let hit = event.vehicle_key.as_str().to_lowercase().contains(&needle)
                || event.id.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(vehicle) = normalized(self.vehicle.as_deref()) {
            if event.vehicle_key.as_str() != vehicle {
                return false;
            }
        }
        if let Some(period) = &self.period {
            // Events without a parseable timestamp were already scoped by
            // the upstream query; dropping them here would pull them out of
            // the volume/spend totals.
            if let Some(recorded_at) = event.recorded_at {
                if !period.contains(recorded_at.date_naive()) {
                    return false;
                }
            }
        }
        true
    }
}

fn normalized(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
