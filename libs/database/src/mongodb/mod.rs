//! MongoDB connection management.

mod config;
mod connector;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, connect_from_config, ping};

pub use mongodb::{Client, Collection, Database};
