use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, from_document, to_document},
    options::FindOptions,
};
use std::marker::PhantomData;
use tracing::instrument;

use super::{
    DocumentStore, Entity, Filter, Page, Patch, Query, ReadStore, StoreError, StoreResult,
    UPDATED_AT, parse_object_id, timestamp,
};

/// [`DocumentStore`] over a MongoDB collection named by `E::COLLECTION`.
pub struct MongoStore<E> {
    collection: Collection<Document>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> MongoStore<E> {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db.collection::<Document>(E::COLLECTION))
    }

    pub fn with_collection(collection: Collection<Document>) -> Self {
        Self {
            collection,
            _entity: PhantomData,
        }
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    fn decode(document: Document) -> StoreResult<E> {
        Ok(from_document(document)?)
    }
}

impl<E> Clone for MongoStore<E> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> ReadStore<E> for MongoStore<E> {
    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn find_by_id(&self, id: &str) -> StoreResult<E> {
        let oid = parse_object_id(id)?;
        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| StoreError::not_found(E::COLLECTION, id))?;
        Self::decode(document)
    }

    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn find_one(&self, filter: Filter) -> StoreResult<Option<E>> {
        self.collection
            .find_one(filter.to_document())
            .await?
            .map(Self::decode)
            .transpose()
    }

    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn query(&self, query: Query) -> StoreResult<Page<E>> {
        let filter = query.filter.to_document();
        let total = self.collection.count_documents(filter.clone()).await?;

        if query.limit <= 0 {
            return Ok(Page {
                items: Vec::new(),
                total,
            });
        }

        let mut options = FindOptions::default();
        options.limit = Some(query.limit);
        options.skip = Some(query.offset);
        options.sort = query.sort_document();

        let documents: Vec<Document> = self
            .collection
            .find(filter)
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        let items = documents
            .into_iter()
            .map(Self::decode)
            .collect::<StoreResult<Vec<E>>>()?;

        Ok(Page { items, total })
    }

    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn count(&self, filter: Filter) -> StoreResult<u64> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn count_distinct(&self, filter: Filter, field: &str) -> StoreResult<u64> {
        let pipeline = vec![
            doc! { "$match": filter.to_document() },
            doc! { "$group": { "_id": format!("${field}") } },
            doc! { "$count": "count" },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let Some(result) = cursor.try_next().await? else {
            // $count emits nothing for an empty input
            return Ok(0);
        };

        let count = match result.get("count") {
            Some(mongodb::bson::Bson::Int32(n)) => i64::from(*n),
            Some(mongodb::bson::Bson::Int64(n)) => *n,
            other => {
                return Err(StoreError::Encoding(format!(
                    "unexpected $count result: {other:?}"
                )));
            }
        };
        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl<E: Entity> DocumentStore<E> for MongoStore<E> {
    #[instrument(skip(self, entity), fields(collection = E::COLLECTION))]
    async fn insert(&self, mut entity: E) -> StoreResult<E> {
        entity.stamp_created(&timestamp());

        let document = to_document(&entity)?;
        let result = self.collection.insert_one(document).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Backend(format!(
                "inserted id is not an ObjectId: {:?}",
                result.inserted_id
            ))
        })?;
        entity.set_id(id);

        tracing::debug!(id = %id, "record inserted");
        Ok(entity)
    }

    #[instrument(skip(self, patch), fields(collection = E::COLLECTION))]
    async fn update_fields(&self, id: &str, patch: Patch) -> StoreResult<()> {
        let oid = parse_object_id(id)?;

        let mut set = patch.to_document();
        if E::TRACKS_UPDATES {
            set.insert(UPDATED_AT, timestamp());
        }
        if set.is_empty() {
            return Ok(());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": set })
            .await?;
        tracing::debug!(matched = result.matched_count, "record updated");
        Ok(())
    }

    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn delete(&self, id: &str) -> StoreResult<()> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        tracing::debug!(deleted = result.deleted_count, "record deleted");
        Ok(())
    }
}
