//! Irrigation planning service
//!
//! Wraps the pure estimator with caller-side input validation; the UI
//! talks to this service, never to the estimator directly.

use serde::Deserialize;
use shared::{
    crops, plan_irrigation, seasons, soils, validate_area, validate_selection, Crop,
    IrrigationEstimate, Season, Soil,
};

use crate::error::{AppError, AppResult};

/// Input for one irrigation-plan calculation
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub crop: String,
    pub soil: String,
    pub season: String,
    pub area_sqm: f64,
}

/// Planner service
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerService;

impl PlannerService {
    pub fn new() -> Self {
        Self
    }

    /// Reference data for the crop selection widget
    pub fn crops(&self) -> &'static [Crop] {
        crops()
    }

    /// Reference data for the soil selection widget
    pub fn soils(&self) -> &'static [Soil] {
        soils()
    }

    /// Reference data for the season selection widget
    pub fn seasons(&self) -> &'static [Season] {
        seasons()
    }

    /// Compute an irrigation estimate for the request
    ///
    /// Validates the request field by field, then delegates to the
    /// estimator. Unknown ids surface as lookup errors; no estimate is
    /// produced on any failure.
    pub fn calculate(&self, request: &PlanRequest) -> AppResult<IrrigationEstimate> {
        self.validate_request(request)?;

        let estimate =
            plan_irrigation(&request.crop, &request.soil, &request.season, request.area_sqm)?;

        tracing::debug!(
            crop = %request.crop,
            soil = %request.soil,
            season = %request.season,
            area_sqm = request.area_sqm,
            weekly_total = estimate.weekly_total,
            "computed irrigation estimate"
        );

        Ok(estimate)
    }

    fn validate_request(&self, request: &PlanRequest) -> AppResult<()> {
        validate_selection(&request.crop).map_err(|m| AppError::validation("crop", m))?;
        validate_selection(&request.soil).map_err(|m| AppError::validation("soil", m))?;
        validate_selection(&request.season).map_err(|m| AppError::validation("season", m))?;
        validate_area(request.area_sqm).map_err(|m| AppError::validation("area_sqm", m))?;
        Ok(())
    }
}
