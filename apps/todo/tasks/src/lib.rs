//! Tasks gRPC Service
//!
//! Owns the `tasks` collection and serves `todo.TaskService`.
//!
//! ## Architecture
//!
//! ```text
//! Gateway
//!   ↓ (gRPC with Zstd compression)
//! TaskServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions via From traits)
//! TaskService (domain layer)
//!   ↓
//! MongoStore<Task>
//!   ↓
//! MongoDB
//! ```
//!
//! ## Modules
//!
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (TaskServiceImpl)

pub mod server;
pub mod service;

pub use server::run;
pub use service::TaskServiceImpl;
