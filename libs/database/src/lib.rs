//! Persistence for the todo services.
//!
//! - [`mongodb`]: connection settings and connector for the shared MongoDB deployment
//! - [`store`]: the generic document store every domain service persists through
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{MongoConfig, connect_from_config};
//! use database::store::MongoStore;
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config(&config).await?;
//! let tasks: MongoStore<Task> = MongoStore::new(&client.database(config.database()));
//! ```

pub mod mongodb;
pub mod store;

pub use store::{
    CREATED_AT, DocumentStore, Entity, FieldValue, Filter, MemoryStore, MongoStore, Page, Patch,
    Query, ReadStore, Sort, SortDirection, StoreError, StoreResult, UPDATED_AT, parse_object_id,
    timestamp,
};
