//! Notifications gRPC Service
//!
//! Stores per-user notifications and serves `todo.NotificationService`.

pub mod server;
pub mod service;

pub use server::run;
pub use service::NotificationServiceImpl;
