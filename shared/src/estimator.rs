//! The irrigation estimator
//!
//! A pure function combining crop, soil, and season coefficients with the
//! farm area into a water-usage estimate and advisory text. Calling it
//! twice with the same inputs yields the same result.

use thiserror::Error;

use crate::models::IrrigationEstimate;
use crate::reference::{find_crop, find_season, find_soil};
use crate::types::WaterRetention;

/// An id that has no entry in its reference table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown crop id: {0}")]
    UnknownCrop(String),

    #[error("unknown soil id: {0}")]
    UnknownSoil(String),

    #[error("unknown season id: {0}")]
    UnknownSeason(String),
}

/// Crops above this baseline need (liters per m² per day) get the
/// high-water-needs advisory. Strictly greater-than: cotton at 6.0 does not
/// qualify.
const HIGH_WATER_NEED_THRESHOLD: f64 = 6.0;

/// Compute an irrigation estimate for a crop/soil/season/area combination
///
/// The caller is responsible for validating `area_sqm`
/// (see [`validate_area`](crate::validation::validate_area)); this routine
/// only resolves the three ids and fails with a [`LookupError`] if any of
/// them is unknown. No partial result is produced on failure.
pub fn plan_irrigation(
    crop_id: &str,
    soil_id: &str,
    season_id: &str,
    area_sqm: f64,
) -> Result<IrrigationEstimate, LookupError> {
    let crop = find_crop(crop_id).ok_or_else(|| LookupError::UnknownCrop(crop_id.to_string()))?;
    let soil = find_soil(soil_id).ok_or_else(|| LookupError::UnknownSoil(soil_id.to_string()))?;
    let season =
        find_season(season_id).ok_or_else(|| LookupError::UnknownSeason(season_id.to_string()))?;

    let water_per_sqm =
        round_one_decimal(crop.water_need_per_sqm * soil.multiplier * season.multiplier);
    let daily_total = water_per_sqm * area_sqm;

    // Advisory rules fire in a fixed order; all matching rules are included.
    let mut tips = Vec::new();
    if season.id == "monsoon" {
        tips.push("🌧️ Reduce watering during rainy days".to_string());
    }
    if season.id == "summer" {
        tips.push("☀️ Water early morning (before 8 AM) to minimize evaporation".to_string());
    }
    if soil.water_retention == WaterRetention::Low {
        tips.push("💧 Sandy soil dries quickly — consider mulching".to_string());
    }
    if soil.water_retention == WaterRetention::High {
        tips.push("⚠️ Be careful of waterlogging with this soil type".to_string());
    }
    if crop.water_need_per_sqm > HIGH_WATER_NEED_THRESHOLD {
        tips.push("🚿 This crop has high water needs — ensure consistent supply".to_string());
    }
    tips.push("📏 Check soil moisture 2-3 inches deep before watering".to_string());
    tips.push("🌅 Best to irrigate in early morning for optimal absorption".to_string());

    let days_per_week = adjusted_days_per_week(crop.irrigation_frequency, season.id);

    Ok(IrrigationEstimate {
        water_per_sqm,
        frequency: crop.irrigation_frequency.to_string(),
        best_time: crop.optimal_time.to_string(),
        tips,
        season_tip: season.tip.to_string(),
        weekly_total: (daily_total * days_per_week as f64).round() as i64,
    })
}

/// Watering days per week, derived from the crop's free-text frequency
/// descriptor and adjusted for the season
///
/// The descriptor is matched by substring in priority order; descriptors
/// that match nothing fall back to daily watering. Monsoon halves the
/// count and winter takes 70%, both rounded and floored at one day.
fn adjusted_days_per_week(frequency: &str, season_id: &str) -> i64 {
    let base: i64 = if frequency.contains("2-3") {
        3
    } else if frequency.contains("3-4") {
        2
    } else if frequency.contains("3-5") {
        2
    } else {
        // "Daily" and any descriptor matching no pattern both water daily
        7
    };

    match season_id {
        "monsoon" => ((base as f64 * 0.5).round() as i64).max(1),
        "winter" => ((base as f64 * 0.7).round() as i64).max(1),
        _ => base,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
