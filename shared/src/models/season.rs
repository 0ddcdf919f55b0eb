//! Season reference model

use serde::Serialize;

/// A growing season and its effect on water demand
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Season {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Scaling factor applied to a crop's baseline water need
    pub multiplier: f64,
    /// Season-specific advisory shown with every estimate
    pub tip: &'static str,
}
