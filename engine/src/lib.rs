//! AquaCrop Planner - Engine
//!
//! The stateful core behind the planner UI: configuration, the persisted
//! history blob, and the planning, history, and reporting services. All
//! operations are synchronous; the only shared resource is the history
//! blob, owned exclusively by the history service.

pub mod config;
pub mod error;
pub mod services;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::{HistoryService, PlannerService, ReportingService};
pub use storage::{BlobStore, FileStore, MemoryStore};
