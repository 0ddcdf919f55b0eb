//! Validation helpers for planner inputs
//!
//! The estimator assumes its inputs were validated by the caller; these
//! helpers are that caller-side check, shared between the engine services
//! and the WASM bindings.

// ============================================================================
// Plan Input Validations
// ============================================================================

/// Validate a farm area in square meters
pub fn validate_area(area_sqm: f64) -> Result<(), &'static str> {
    if !area_sqm.is_finite() {
        return Err("Area must be a finite number");
    }
    if area_sqm <= 0.0 {
        return Err("Area must be positive");
    }
    Ok(())
}

/// Validate a reference-table selection (crop, soil, or season id)
pub fn validate_selection(id: &str) -> Result<(), &'static str> {
    if id.trim().is_empty() {
        return Err("A selection is required");
    }
    Ok(())
}
