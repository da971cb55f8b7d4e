//! Analytics Domain
//!
//! Append-only usage events, plus task statistics.
//!
//! The statistics are computed from the **task** collection, not from events:
//! [`AnalyticsService`] holds a read-only store of `domain_tasks::Task` next to
//! its own event store. Each figure is a separate count, so a snapshot taken
//! while tasks are being written may not add up (e.g. `completed + pending`
//! can differ from `total`).

pub mod conversions;
pub mod error;
pub mod models;
pub mod service;

pub use error::{AnalyticsError, AnalyticsResult};
pub use models::{Event, StatsRange, TaskStats, TrackEvent, UserStats};
pub use service::AnalyticsService;
