//! Users Domain
//!
//! Accounts, password hashing and authentication.
//!
//! - `service`: create/get/update/delete and `authenticate`
//! - `password`: Argon2id hashing; plaintext passwords are never stored
//! - `token`: the [`TokenIssuer`] seam and its JWT implementation
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use database::MongoStore;
//! use domain_users::{JwtConfig, JwtTokenIssuer, User, UserService};
//!
//! # fn example(db: mongodb::Database) -> Result<(), Box<dyn std::error::Error>> {
//! let issuer = JwtTokenIssuer::new(&JwtConfig::from_env()?);
//! let service = UserService::new(MongoStore::<User>::new(&db), issuer);
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod models;
pub mod password;
pub mod service;
pub mod token;

pub use error::{UserError, UserResult};
pub use models::{AuthenticatedUser, CreateUser, UpdateUser, User};
pub use service::UserService;
pub use token::{JwtConfig, JwtTokenIssuer, TokenClaims, TokenIssuer};
