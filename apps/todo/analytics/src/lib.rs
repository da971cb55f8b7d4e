//! Analytics gRPC Service
//!
//! Records usage events and reports task statistics over `todo.AnalyticsService`.
//! Statistics read the `tasks` collection owned by the tasks service directly;
//! both services must point at the same database.

pub mod server;
pub mod service;

pub use server::run;
pub use service::AnalyticsServiceImpl;
