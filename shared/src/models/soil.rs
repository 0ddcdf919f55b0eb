//! Soil reference model

use serde::Serialize;

use crate::types::{DrainageRate, WaterRetention};

/// A soil type and its effect on water demand
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Soil {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub water_retention: WaterRetention,
    pub drainage_rate: DrainageRate,
    /// Scaling factor applied to a crop's baseline water need
    pub multiplier: f64,
    pub description: &'static str,
}
