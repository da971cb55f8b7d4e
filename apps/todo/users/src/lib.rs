//! Users gRPC Service
//!
//! Owns the `users` collection, password hashing and login tokens; serves
//! `todo.UserService`. Password hashes never leave this process.
//!
//! ```text
//! Gateway
//!   ↓ (gRPC with Zstd compression)
//! UserServiceImpl (service.rs)
//!   ↓
//! UserService (domain layer: argon2, JWT)
//!   ↓
//! MongoStore<User>
//! ```

pub mod server;
pub mod service;

pub use server::run;
pub use service::UserServiceImpl;
