//! Irrigation history models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted record of one completed irrigation-plan calculation
///
/// Serialized field names match the stored blob schema, which predates
/// this crate: `{id, date, crop, soil, season, waterUsed, area}`.
/// The crop/soil/season fields hold reference ids as of save time; a
/// stale id is displayed as-is rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationLog {
    pub id: String,
    pub date: NaiveDate,
    pub crop: String,
    pub soil: String,
    pub season: String,
    /// Liters per week, taken from the estimate's weekly total
    pub water_used: f64,
    /// Farm area in square meters
    pub area: f64,
}

/// An irrigation log before an id has been assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewIrrigationLog {
    pub date: NaiveDate,
    pub crop: String,
    pub soil: String,
    pub season: String,
    pub water_used: f64,
    pub area: f64,
}

impl NewIrrigationLog {
    /// Attach a generated id, producing the persistable record
    pub fn into_log(self, id: String) -> IrrigationLog {
        IrrigationLog {
            id,
            date: self.date,
            crop: self.crop,
            soil: self.soil,
            season: self.season,
            water_used: self.water_used,
            area: self.area,
        }
    }
}
