//! Services consumed by the AquaCrop Planner UI

pub mod history;
pub mod planner;
pub mod reporting;

pub use history::HistoryService;
pub use planner::PlannerService;
pub use reporting::ReportingService;
