//! Irrigation estimate model

use serde::Serialize;

/// Result of one irrigation-plan calculation
///
/// Derived on demand and never persisted; saving a plan stores an
/// [`IrrigationLog`](super::IrrigationLog) instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IrrigationEstimate {
    /// Liters per square meter per day, rounded to one decimal
    pub water_per_sqm: f64,
    /// The crop's frequency descriptor, verbatim
    pub frequency: String,
    /// The crop's recommended irrigation time, verbatim
    pub best_time: String,
    /// Ordered advisory list; always ends with the two unconditional tips
    pub tips: Vec<String>,
    pub season_tip: String,
    /// Liters per week for the whole area, rounded to an integer
    pub weekly_total: i64,
}
