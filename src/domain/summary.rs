use serde::{Deserialize, Serialize};

/// Derived fleet fuel figures for one aggregation pass.
///
/// All four figures are finite and non-negative. Zero means "insufficient
/// data", a valid answer distinct from an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FuelSummary {
    pub total_volume: f64,
    pub total_spend: f64,
    pub average_price_per_volume: f64,
    pub average_efficiency: f64,
}

impl FuelSummary {
    /// Assembles the result from accumulated parts, deriving the price
    /// ratio and coercing any non-finite intermediate to zero.
    pub fn from_parts(total_volume: f64, total_spend: f64, average_efficiency: f64) -> Self {
        let average_price_per_volume = if total_volume > 0.0 {
            total_spend / total_volume
        } else {
            0.0
        };
        Self {
            total_volume: finite_or_zero(total_volume),
            total_spend: finite_or_zero(total_spend),
            average_price_per_volume: finite_or_zero(average_price_per_volume),
            average_efficiency: finite_or_zero(average_efficiency),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}
