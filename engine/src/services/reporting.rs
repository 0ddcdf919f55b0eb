//! Reporting service for the dashboard, analytics, and schedule views
//!
//! Pure aggregation over the stored logs; the UI renders these numbers
//! as-is. Crop ids are resolved against the reference table for display,
//! falling back to the raw id when an id no longer resolves.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use shared::{find_crop, season_for_month, IrrigationLog};

/// How many recent entries feed the usage-by-date trend
const TREND_WINDOW: usize = 14;

/// Headline numbers for the dashboard view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardMetrics {
    /// Season auto-detected from the current date
    pub season_id: String,
    pub season_name: String,
    pub season_tip: String,
    pub total_logs: usize,
    /// Liters across all stored logs, rounded
    pub total_water_liters: i64,
    pub todays_logs: usize,
}

/// Aggregate water-usage summary for the analytics view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UsageSummary {
    pub total_water_liters: i64,
    /// Rounded average per plan; zero when there are no plans
    pub avg_liters_per_plan: i64,
    pub total_plans: usize,
}

/// Water total attributed to one crop
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropUsage {
    /// Crop display name, or the raw id when it no longer resolves
    pub label: String,
    pub water_liters: i64,
}

/// Water total for one calendar day
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyUsage {
    pub date: NaiveDate,
    pub water_liters: i64,
}

/// Logs grouped under one calendar day
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub entries: Vec<IrrigationLog>,
}

/// Reporting service
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportingService;

impl ReportingService {
    pub fn new() -> Self {
        Self
    }

    /// Metrics for the dashboard view
    pub fn dashboard(&self, logs: &[IrrigationLog], today: NaiveDate) -> DashboardMetrics {
        let season = season_for_month(today.month());
        let total_water: f64 = logs.iter().map(|l| l.water_used).sum();

        DashboardMetrics {
            season_id: season.id.to_string(),
            season_name: season.name.to_string(),
            season_tip: season.tip.to_string(),
            total_logs: logs.len(),
            total_water_liters: total_water.round() as i64,
            todays_logs: logs.iter().filter(|l| l.date == today).count(),
        }
    }

    /// Aggregate usage numbers for the analytics view
    pub fn usage_summary(&self, logs: &[IrrigationLog]) -> UsageSummary {
        let total: f64 = logs.iter().map(|l| l.water_used).sum();
        let avg = if logs.is_empty() {
            0
        } else {
            (total / logs.len() as f64).round() as i64
        };

        UsageSummary {
            total_water_liters: total.round() as i64,
            avg_liters_per_plan: avg,
            total_plans: logs.len(),
        }
    }

    /// Water totals per crop, in first-seen order
    pub fn water_by_crop(&self, logs: &[IrrigationLog]) -> Vec<CropUsage> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, f64> = HashMap::new();

        for log in logs {
            let label = find_crop(&log.crop)
                .map(|c| c.name.to_string())
                .unwrap_or_else(|| log.crop.clone());
            if !totals.contains_key(&label) {
                order.push(label.clone());
            }
            *totals.entry(label).or_insert(0.0) += log.water_used;
        }

        order
            .into_iter()
            .map(|label| {
                let water = totals[&label];
                CropUsage {
                    label,
                    water_liters: water.round() as i64,
                }
            })
            .collect()
    }

    /// Water totals per day over the most recent entries, oldest first
    ///
    /// Only the [`TREND_WINDOW`] most recent logs feed the trend, matching
    /// what the analytics chart displays.
    pub fn water_by_date(&self, logs: &[IrrigationLog]) -> Vec<DailyUsage> {
        let mut order: Vec<NaiveDate> = Vec::new();
        let mut totals: HashMap<NaiveDate, f64> = HashMap::new();

        for log in logs.iter().take(TREND_WINDOW) {
            if !totals.contains_key(&log.date) {
                order.push(log.date);
            }
            *totals.entry(log.date).or_insert(0.0) += log.water_used;
        }

        order
            .into_iter()
            .rev()
            .map(|date| DailyUsage {
                date,
                water_liters: totals[&date].round() as i64,
            })
            .collect()
    }

    /// Logs grouped by date for the schedule view
    ///
    /// Date groups appear in the order the dates are first encountered,
    /// so a most-recent-first input yields a most-recent-first schedule.
    pub fn schedule(&self, logs: &[IrrigationLog]) -> Vec<ScheduleDay> {
        let mut days: Vec<ScheduleDay> = Vec::new();

        for log in logs {
            match days.iter_mut().find(|d| d.date == log.date) {
                Some(day) => day.entries.push(log.clone()),
                None => days.push(ScheduleDay {
                    date: log.date,
                    entries: vec![log.clone()],
                }),
            }
        }

        days
    }
}
