//! Tests for the reporting service
//!
//! Covers dashboard metrics, usage summaries, per-crop and per-date
//! aggregation, raw-id display fallback, and schedule grouping.

use aquacrop_engine::ReportingService;
use chrono::NaiveDate;
use shared::IrrigationLog;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

/// Helper to build a stored log
fn log(id: &str, crop: &str, water_used: f64, day: u32) -> IrrigationLog {
    IrrigationLog {
        id: id.to_string(),
        date: date(day),
        crop: crop.to_string(),
        soil: "loamy".to_string(),
        season: "summer".to_string(),
        water_used,
        area: 100.0,
    }
}

// ============================================================================
// Dashboard Metrics
// ============================================================================

mod dashboard {
    use super::*;

    #[test]
    fn summarizes_totals_and_todays_activity() {
        let service = ReportingService::new();
        let logs = vec![
            log("3", "corn", 300.0, 12),
            log("2", "wheat", 680.0, 12),
            log("1", "rice", 880.0, 10),
        ];

        let metrics = service.dashboard(&logs, date(12));
        assert_eq!(metrics.total_logs, 3);
        assert_eq!(metrics.total_water_liters, 1860);
        assert_eq!(metrics.todays_logs, 2);
    }

    #[test]
    fn detects_the_season_from_the_date() {
        let service = ReportingService::new();

        let june = service.dashboard(&[], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(june.season_id, "summer");
        assert!(!june.season_tip.is_empty());

        let october = service.dashboard(&[], NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(october.season_id, "monsoon");

        let april = service.dashboard(&[], NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(april.season_id, "spring");

        let january = service.dashboard(&[], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(january.season_id, "winter");
    }

    #[test]
    fn empty_history_reads_as_zeroes() {
        let metrics = ReportingService::new().dashboard(&[], date(1));
        assert_eq!(metrics.total_logs, 0);
        assert_eq!(metrics.total_water_liters, 0);
        assert_eq!(metrics.todays_logs, 0);
    }
}

// ============================================================================
// Usage Summary
// ============================================================================

mod usage_summary {
    use super::*;

    #[test]
    fn averages_round_to_whole_liters() {
        let service = ReportingService::new();
        let logs = vec![
            log("1", "rice", 100.0, 1),
            log("2", "rice", 101.0, 2),
        ];

        let summary = service.usage_summary(&logs);
        assert_eq!(summary.total_water_liters, 201);
        // 100.5 rounds up
        assert_eq!(summary.avg_liters_per_plan, 101);
        assert_eq!(summary.total_plans, 2);
    }

    #[test]
    fn empty_history_has_zero_average() {
        let summary = ReportingService::new().usage_summary(&[]);
        assert_eq!(summary.total_water_liters, 0);
        assert_eq!(summary.avg_liters_per_plan, 0);
        assert_eq!(summary.total_plans, 0);
    }
}

// ============================================================================
// Water by Crop
// ============================================================================

mod water_by_crop {
    use super::*;

    #[test]
    fn totals_group_under_resolved_crop_names() {
        let service = ReportingService::new();
        let logs = vec![
            log("3", "rice", 100.0, 3),
            log("2", "wheat", 680.0, 2),
            log("1", "rice", 880.0, 1),
        ];

        let usage = service.water_by_crop(&logs);
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].label, "Rice");
        assert_eq!(usage[0].water_liters, 980);
        assert_eq!(usage[1].label, "Wheat");
        assert_eq!(usage[1].water_liters, 680);
    }

    #[test]
    fn stale_crop_ids_fall_back_to_the_raw_id() {
        let service = ReportingService::new();
        let logs = vec![log("1", "dragonfruit", 42.0, 1)];

        let usage = service.water_by_crop(&logs);
        assert_eq!(usage[0].label, "dragonfruit");
        assert_eq!(usage[0].water_liters, 42);
    }
}

// ============================================================================
// Water by Date
// ============================================================================

mod water_by_date {
    use super::*;

    #[test]
    fn daily_totals_come_back_oldest_first() {
        let service = ReportingService::new();
        // Most-recent-first input, as list() returns it
        let logs = vec![
            log("3", "corn", 300.0, 12),
            log("2", "wheat", 200.0, 12),
            log("1", "rice", 100.0, 10),
        ];

        let trend = service.water_by_date(&logs);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, date(10));
        assert_eq!(trend[0].water_liters, 100);
        assert_eq!(trend[1].date, date(12));
        assert_eq!(trend[1].water_liters, 500);
    }

    #[test]
    fn only_the_fourteen_most_recent_entries_feed_the_trend() {
        let service = ReportingService::new();
        let logs: Vec<IrrigationLog> = (1..=20)
            .rev()
            .map(|day| log(&day.to_string(), "rice", 10.0, day))
            .collect();

        let trend = service.water_by_date(&logs);
        assert_eq!(trend.len(), 14);
        // The oldest six days fell outside the window
        assert_eq!(trend[0].date, date(7));
        assert_eq!(trend[13].date, date(20));
    }
}

// ============================================================================
// Schedule Grouping
// ============================================================================

mod schedule {
    use super::*;

    #[test]
    fn logs_group_by_date_most_recent_first() {
        let service = ReportingService::new();
        let logs = vec![
            log("4", "corn", 300.0, 12),
            log("3", "wheat", 200.0, 12),
            log("2", "rice", 100.0, 10),
            log("1", "tomato", 50.0, 10),
        ];

        let days = service.schedule(&logs);
        assert_eq!(days.len(), 2);

        assert_eq!(days[0].date, date(12));
        assert_eq!(days[0].entries.len(), 2);
        assert_eq!(days[0].entries[0].id, "4");

        assert_eq!(days[1].date, date(10));
        assert_eq!(days[1].entries.len(), 2);
        assert_eq!(days[1].entries[1].id, "1");
    }

    #[test]
    fn empty_history_has_no_schedule_days() {
        assert!(ReportingService::new().schedule(&[]).is_empty());
    }
}
