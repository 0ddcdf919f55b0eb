//! Common types used across the planner

use serde::{Deserialize, Serialize};

/// How well a soil holds water between irrigations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WaterRetention {
    Low,
    Medium,
    High,
}

impl WaterRetention {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterRetention::Low => "low",
            WaterRetention::Medium => "medium",
            WaterRetention::High => "high",
        }
    }
}

/// How quickly water drains through a soil
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DrainageRate {
    Fast,
    Moderate,
    Slow,
}

impl DrainageRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrainageRate::Fast => "fast",
            DrainageRate::Moderate => "moderate",
            DrainageRate::Slow => "slow",
        }
    }
}
