//! WebAssembly module for the AquaCrop Planner
//!
//! Provides client-side computation for:
//! - Irrigation estimates
//! - Reference-data access for the selection widgets
//! - Season auto-detection
//! - Offline input validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::estimator::*;
pub use shared::models::*;
pub use shared::reference::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Compute an irrigation estimate, returned as a JSON string
#[wasm_bindgen]
pub fn calculate_irrigation(
    crop_id: &str,
    soil_id: &str,
    season_id: &str,
    area_sqm: f64,
) -> Result<String, JsValue> {
    validate_area(area_sqm).map_err(JsValue::from_str)?;

    let estimate = plan_irrigation(crop_id, soil_id, season_id, area_sqm)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&estimate)
        .map_err(|e| JsValue::from_str(&format!("serialize estimate: {}", e)))
}

/// All crops as JSON, in display order
#[wasm_bindgen]
pub fn crops_json() -> String {
    serde_json::to_string(crops()).unwrap_or_else(|_| "[]".to_string())
}

/// All soil types as JSON, in display order
#[wasm_bindgen]
pub fn soils_json() -> String {
    serde_json::to_string(soils()).unwrap_or_else(|_| "[]".to_string())
}

/// All seasons as JSON, in display order
#[wasm_bindgen]
pub fn seasons_json() -> String {
    serde_json::to_string(seasons()).unwrap_or_else(|_| "[]".to_string())
}

/// Season id in effect for a calendar month (1-12)
#[wasm_bindgen]
pub fn current_season(month: u32) -> String {
    season_for_month(month).id.to_string()
}

/// Validate a farm-area input before enabling the calculate button
#[wasm_bindgen]
pub fn validate_area_input(area_sqm: f64) -> bool {
    validate_area(area_sqm).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_irrigation_returns_estimate_json() {
        let json = calculate_irrigation("rice", "clay", "monsoon", 100.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["water_per_sqm"], 2.2);
        assert_eq!(value["weekly_total"], 880);
    }

    #[test]
    fn test_calculate_irrigation_rejects_bad_input() {
        assert!(calculate_irrigation("rice", "clay", "monsoon", 0.0).is_err());
        assert!(calculate_irrigation("quinoa", "clay", "monsoon", 10.0).is_err());
    }

    #[test]
    fn test_reference_json_accessors() {
        let crops: serde_json::Value = serde_json::from_str(&crops_json()).unwrap();
        assert_eq!(crops.as_array().unwrap().len(), 8);

        let soils: serde_json::Value = serde_json::from_str(&soils_json()).unwrap();
        assert_eq!(soils.as_array().unwrap().len(), 6);

        let seasons: serde_json::Value = serde_json::from_str(&seasons_json()).unwrap();
        assert_eq!(seasons.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_current_season() {
        assert_eq!(current_season(4), "spring");
        assert_eq!(current_season(7), "summer");
        assert_eq!(current_season(9), "monsoon");
        assert_eq!(current_season(12), "winter");
    }

    #[test]
    fn test_validate_area_input() {
        assert!(validate_area_input(100.0));
        assert!(!validate_area_input(0.0));
        assert!(!validate_area_input(-5.0));
    }
}
