//! Crop reference model

use serde::Serialize;

/// A crop with its baseline irrigation profile
///
/// Reference data is compiled in, so the fields borrow from the binary
/// rather than owning their strings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Crop {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Liters per square meter per day under baseline conditions
    pub water_need_per_sqm: f64,
    /// Free-text frequency descriptor shown to the user, e.g. "Every 2-3 days"
    pub irrigation_frequency: &'static str,
    /// Recommended time of day to irrigate
    pub optimal_time: &'static str,
    pub growth_duration: &'static str,
    pub description: &'static str,
}
