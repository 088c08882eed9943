//! Turns a snapshot of refueling events into fleet fuel KPIs.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::{FilterCriteria, FuelSummary, RefuelingEvent, VehicleKey};

/// Computes the fleet summary for one event snapshot.
///
/// Stateless and pure: the same snapshot and criteria always produce the
/// same figures, independent of input order. Malformed individual events
/// are excluded from the sub-computation they would corrupt but never abort
/// the pass.
pub fn aggregate(events: &[RefuelingEvent], criteria: &FilterCriteria) -> FuelSummary {
    let visible: Vec<&RefuelingEvent> = events
        .iter()
        .filter(|event| criteria.matches(event))
        .collect();

    let mut total_volume = 0.0;
    let mut total_spend = 0.0;
    for event in &visible {
        total_volume += event
            .volume_purchased
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(0.0);
        total_spend += event
            .total_amount_paid
            .filter(|value| value.is_finite() && *value >= 0.0)
            .unwrap_or(0.0);
    }

    let average_efficiency =
        delta_efficiency(&visible).unwrap_or_else(|| fallback_efficiency(&visible));

    FuelSummary::from_parts(total_volume, total_spend, average_efficiency)
}

/// Pooled odometer-delta efficiency across the whole fleet.
///
/// Distances and volumes accumulate into a single fleet-wide ratio rather
/// than a mean of per-vehicle ratios. Returns `None` when no vehicle
/// contributed a valid consecutive pair, so the caller can fall back to
/// reported figures.
fn delta_efficiency(events: &[&RefuelingEvent]) -> Option<f64> {
    let mut groups: BTreeMap<&VehicleKey, Vec<&RefuelingEvent>> = BTreeMap::new();
    for &event in events {
        // Events whose timestamp failed to parse cannot be ordered.
        if event.recorded_at.is_some() {
            groups.entry(&event.vehicle_key).or_default().push(event);
        }
    }

    let mut sum_distance = 0.0;
    let mut sum_volume = 0.0;
    for group in groups.values_mut() {
        group.sort_by(|a, b| chronological(a, b));
        for pair in group.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            let (Some(from), Some(to)) = (previous.odometer_reading, current.odometer_reading)
            else {
                continue;
            };
            let delta = to - from;
            if !delta.is_finite() || delta <= 0.0 {
                // Non-increasing readings are data errors, not reversals;
                // the pair is skipped, never subtracted.
                tracing::debug!(
                    vehicle = %current.vehicle_key,
                    from,
                    to,
                    "skipping non-increasing odometer pair"
                );
                continue;
            }
            let Some(volume) = current.volume_purchased else {
                continue;
            };
            if !volume.is_finite() || volume <= 0.0 {
                continue;
            }
            sum_distance += delta;
            sum_volume += volume;
        }
    }

    (sum_volume > 0.0).then(|| sum_distance / sum_volume)
}

/// Arithmetic mean of self-reported efficiency figures, used when no
/// odometer pair survived the delta walk.
fn fallback_efficiency(events: &[&RefuelingEvent]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for event in events {
        if let Some(reported) = event
            .average_efficiency_reported
            .filter(|value| value.is_finite() && *value > 0.0)
        {
            sum += reported;
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Total order over a vehicle group: timestamp ascending, then odometer
/// reading when both are present and distinct, then id lexicographic.
/// Guarantees reproducible aggregation regardless of input order.
fn chronological(a: &RefuelingEvent, b: &RefuelingEvent) -> Ordering {
    let by_time = a.recorded_at.cmp(&b.recorded_at);
    if by_time != Ordering::Equal {
        return by_time;
    }
    if let (Some(left), Some(right)) = (a.odometer_reading, b.odometer_reading) {
        if left != right {
            return left.total_cmp(&right);
        }
    }
    a.id.cmp(&b.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(vehicle: &str, day: u32) -> RefuelingEvent {
        RefuelingEvent::new(vehicle, Utc.with_ymd_and_hms(2026, 3, day, 8, 0, 0).unwrap())
    }

    #[test]
    fn equal_timestamps_order_by_odometer_then_id() {
        let low = event("TRK-1", 1).with_id("b").with_odometer(1000.0);
        let high = event("TRK-1", 1).with_id("a").with_odometer(1100.0);
        assert_eq!(chronological(&low, &high), Ordering::Less);
        assert_eq!(chronological(&high, &low), Ordering::Greater);

        let bare_a = event("TRK-1", 1).with_id("a");
        let bare_b = event("TRK-1", 1).with_id("b");
        assert_eq!(chronological(&bare_a, &bare_b), Ordering::Less);
    }

    #[test]
    fn fallback_ignores_non_positive_reports() {
        let events = vec![
            event("TRK-1", 1).with_reported_efficiency(8.0),
            event("TRK-2", 1).with_reported_efficiency(0.0),
            event("TRK-3", 1).with_reported_efficiency(10.0),
        ];
        let refs: Vec<&RefuelingEvent> = events.iter().collect();
        assert_eq!(fallback_efficiency(&refs), 9.0);
    }
}
