//! Generic document store.
//!
//! Every domain persists through the same two traits, parameterized by an
//! [`Entity`] type:
//!
//! - [`ReadStore`]: lookups, paged queries and counts
//! - [`DocumentStore`]: adds insert, partial update and idempotent delete
//!
//! [`MongoStore`] is the production implementation. [`MemoryStore`] keeps
//! documents in process and is used by unit and integration tests.
//!
//! Identifiers are BSON ObjectIds rendered as 24 character hex strings.
//! Malformed identifiers fail with [`StoreError::InvalidIdentifier`] before any
//! round trip. Timestamps are RFC 3339 UTC strings with millisecond precision.

mod error;
mod memory;
mod mongo;
mod query;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use query::{FieldValue, Filter, Op, Page, Patch, Query, Sort, SortDirection};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Serialize, de::DeserializeOwned};

/// Field every entity stores its creation time in
pub const CREATED_AT: &str = "created_at";
/// Field stamped on every update of entities that track updates
pub const UPDATED_AT: &str = "updated_at";

/// A record type persisted in its own collection.
///
/// The identifier must serialize as `_id` and be skipped when `None`, so the
/// store can assign it on insert.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    const COLLECTION: &'static str;

    /// Whether the entity has an `updated_at` field to stamp on update.
    const TRACKS_UPDATES: bool = true;

    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    /// Set the creation timestamp (and the update timestamp, if any) to `now`.
    fn stamp_created(&mut self, now: &str);
}

/// Current time in the format stored in `created_at`/`updated_at`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a hex identifier, rejecting anything that is not a 24 character ObjectId.
pub fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

#[async_trait]
pub trait ReadStore<E: Entity>: Send + Sync {
    /// Fails with `InvalidIdentifier` for malformed ids and `NotFound` when absent.
    async fn find_by_id(&self, id: &str) -> StoreResult<E>;

    async fn find_one(&self, filter: Filter) -> StoreResult<Option<E>>;

    /// One page of matches plus the size of the full filtered set.
    ///
    /// `limit <= 0` returns no items; `total` is still computed.
    async fn query(&self, query: Query) -> StoreResult<Page<E>>;

    async fn count(&self, filter: Filter) -> StoreResult<u64>;

    /// Number of distinct values of `field` among matching records.
    async fn count_distinct(&self, filter: Filter, field: &str) -> StoreResult<u64>;
}

#[async_trait]
pub trait DocumentStore<E: Entity>: ReadStore<E> {
    /// Stamp timestamps, persist, and return the entity with its assigned id.
    async fn insert(&self, entity: E) -> StoreResult<E>;

    /// Apply `patch` with `$set` semantics and stamp `updated_at`.
    ///
    /// Updating an id that does not exist is not an error.
    async fn update_fields(&self, id: &str, patch: Patch) -> StoreResult<()>;

    /// Hard delete. Deleting an absent record succeeds.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
