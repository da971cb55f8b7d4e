//! Tasks Domain
//!
//! Business rules for tasks, persisted through the generic document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Validation, read-back after update
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← database::DocumentStore<Task> (Mongo or in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, inputs, filter
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::MongoStore;
//! use domain_tasks::{Task, TaskService};
//!
//! # async fn example(db: mongodb::Database) {
//! let service = TaskService::new(MongoStore::<Task>::new(&db));
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod models;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use models::{CreateTask, Task, TaskFilter, UpdateTask};
pub use service::TaskService;
