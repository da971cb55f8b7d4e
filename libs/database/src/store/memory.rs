use async_trait::async_trait;
use mongodb::bson::{Bson, Document, from_document, oid::ObjectId, to_document};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::query::compare_bson;
use super::{
    DocumentStore, Entity, Filter, Page, Patch, Query, ReadStore, SortDirection, StoreError,
    StoreResult, UPDATED_AT, parse_object_id, timestamp,
};

/// In-process [`DocumentStore`] holding BSON documents in insertion order.
///
/// Clones share the same documents, so one instance can back several services.
/// [`MemoryStore::set_unavailable`] makes every call fail with
/// [`StoreError::Unavailable`] until it is switched back.
/// [`MemoryStore::set_delete_after_update`] removes each record right after
/// a patch lands, as a concurrent delete would.
pub struct MemoryStore<E> {
    documents: Arc<Mutex<Vec<Document>>>,
    unavailable: Arc<AtomicBool>,
    delete_after_update: Arc<AtomicBool>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for MemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
            unavailable: Arc::clone(&self.unavailable),
            delete_after_update: Arc::clone(&self.delete_after_update),
            _entity: PhantomData,
        }
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
            delete_after_update: Arc::new(AtomicBool::new(false)),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    pub fn set_delete_after_update(&self, enabled: bool) {
        self.delete_after_update.store(enabled, AtomicOrdering::SeqCst);
    }

    /// Snapshot of the stored documents, as persisted.
    pub fn raw_documents(&self) -> StoreResult<Vec<Document>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<Document>>> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "{} store is offline",
                E::COLLECTION
            )));
        }
        self.documents
            .lock()
            .map_err(|_| StoreError::Backend(format!("{} store lock poisoned", E::COLLECTION)))
    }

    fn decode(document: Document) -> StoreResult<E> {
        Ok(from_document(document)?)
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(stored)) if stored == id)
}

/// Missing fields sort first, as in MongoDB.
fn compare_field(left: &Document, right: &Document, field: &str) -> Ordering {
    match (left.get(field), right.get(field)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_bson(a, b).unwrap_or(Ordering::Equal),
    }
}

#[async_trait]
impl<E: Entity> ReadStore<E> for MemoryStore<E> {
    async fn find_by_id(&self, id: &str) -> StoreResult<E> {
        let oid = parse_object_id(id)?;
        let found = self
            .lock()?
            .iter()
            .find(|document| has_id(document, &oid))
            .cloned();
        found
            .map(Self::decode)
            .unwrap_or_else(|| Err(StoreError::not_found(E::COLLECTION, id)))
    }

    async fn find_one(&self, filter: Filter) -> StoreResult<Option<E>> {
        let found = self
            .lock()?
            .iter()
            .find(|document| filter.matches(document))
            .cloned();
        found.map(Self::decode).transpose()
    }

    async fn query(&self, query: Query) -> StoreResult<Page<E>> {
        let mut matching: Vec<Document> = self
            .lock()?
            .iter()
            .filter(|document| query.filter.matches(document))
            .cloned()
            .collect();
        let total = matching.len() as u64;

        if query.limit <= 0 {
            return Ok(Page {
                items: Vec::new(),
                total,
            });
        }

        if !query.sort.is_empty() {
            matching.sort_by(|left, right| {
                query
                    .sort
                    .iter()
                    .map(|sort| {
                        let ordering = compare_field(left, right, &sort.field);
                        match sort.direction {
                            SortDirection::Ascending => ordering,
                            SortDirection::Descending => ordering.reverse(),
                        }
                    })
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            });
        }

        let items = matching
            .into_iter()
            .skip(usize::try_from(query.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .map(Self::decode)
            .collect::<StoreResult<Vec<E>>>()?;

        Ok(Page { items, total })
    }

    async fn count(&self, filter: Filter) -> StoreResult<u64> {
        let count = self
            .lock()?
            .iter()
            .filter(|document| filter.matches(document))
            .count();
        Ok(count as u64)
    }

    async fn count_distinct(&self, filter: Filter, field: &str) -> StoreResult<u64> {
        let documents = self.lock()?;
        let mut seen: Vec<Bson> = Vec::new();
        for document in documents.iter().filter(|document| filter.matches(document)) {
            // Documents without the field group together under null
            let value = document.get(field).cloned().unwrap_or(Bson::Null);
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        Ok(seen.len() as u64)
    }
}

#[async_trait]
impl<E: Entity> DocumentStore<E> for MemoryStore<E> {
    async fn insert(&self, mut entity: E) -> StoreResult<E> {
        // Surface an outage before assigning anything
        drop(self.lock()?);

        entity.stamp_created(&timestamp());
        entity.set_id(ObjectId::new());
        let document = to_document(&entity)?;

        self.lock()?.push(document);
        Ok(entity)
    }

    async fn update_fields(&self, id: &str, patch: Patch) -> StoreResult<()> {
        let oid = parse_object_id(id)?;
        let mut documents = self.lock()?;

        if let Some(document) = documents.iter_mut().find(|document| has_id(document, &oid)) {
            for (field, value) in patch.fields() {
                document.insert(field, value.to_bson());
            }
            if E::TRACKS_UPDATES {
                document.insert(UPDATED_AT, timestamp());
            }
        }
        if self.delete_after_update.load(AtomicOrdering::SeqCst) {
            documents.retain(|document| !has_id(document, &oid));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let oid = parse_object_id(id)?;
        self.lock()?.retain(|document| !has_id(document, &oid));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CREATED_AT, Sort};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
        id: Option<ObjectId>,
        owner: String,
        body: String,
        pinned: bool,
        #[serde(default)]
        created_at: String,
        #[serde(default)]
        updated_at: String,
    }

    impl Entity for Note {
        const COLLECTION: &'static str = "notes";

        fn id(&self) -> Option<ObjectId> {
            self.id
        }

        fn set_id(&mut self, id: ObjectId) {
            self.id = Some(id);
        }

        fn stamp_created(&mut self, now: &str) {
            self.created_at = now.to_string();
            self.updated_at = now.to_string();
        }
    }

    fn note(owner: &str, body: &str) -> Note {
        Note {
            id: None,
            owner: owner.to_string(),
            body: body.to_string(),
            pinned: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let store = MemoryStore::<Note>::new();
        let stored = store.insert(note("u1", "hello")).await.unwrap();

        let id = stored.id().unwrap();
        assert_eq!(id.to_hex().len(), 24);
        assert!(!stored.created_at.is_empty());
        assert_eq!(stored.created_at, stored.updated_at);

        let fetched = store.find_by_id(&id.to_hex()).await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn test_find_by_id_errors() {
        let store = MemoryStore::<Note>::new();
        assert!(matches!(
            store.find_by_id("nope").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            store.find_by_id(&ObjectId::new().to_hex()).await,
            Err(StoreError::NotFound { collection: "notes", .. })
        ));
    }

    #[tokio::test]
    async fn test_update_fields_patches_and_stamps() {
        let store = MemoryStore::<Note>::new();
        let stored = store.insert(note("u1", "hello")).await.unwrap();
        let id = stored.id().unwrap().to_hex();

        store
            .update_fields(&id, Patch::new().set("body", "edited").set("pinned", true))
            .await
            .unwrap();

        let updated = store.find_by_id(&id).await.unwrap();
        assert_eq!(updated.body, "edited");
        assert!(updated.pinned);
        assert_eq!(updated.created_at, stored.created_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_delete_after_update_removes_patched_record() {
        let store = MemoryStore::<Note>::new();
        let kept = store.insert(note("u1", "kept")).await.unwrap();
        let doomed = store.insert(note("u1", "doomed")).await.unwrap();
        let doomed_id = doomed.id().unwrap().to_hex();

        store.set_delete_after_update(true);
        store
            .update_fields(&doomed_id, Patch::new().set("body", "edited"))
            .await
            .unwrap();

        assert!(matches!(
            store.find_by_id(&doomed_id).await,
            Err(StoreError::NotFound { .. })
        ));
        let remaining = store.query(Query::new(Filter::new()).page(0, 10)).await.unwrap();
        assert_eq!(remaining.items, vec![kept]);
    }

    #[tokio::test]
    async fn test_update_and_delete_of_absent_id_succeed() {
        let store = MemoryStore::<Note>::new();
        let absent = ObjectId::new().to_hex();

        store
            .update_fields(&absent, Patch::new().set("body", "x"))
            .await
            .unwrap();
        store.delete(&absent).await.unwrap();
        store.delete(&absent).await.unwrap();
        assert_eq!(store.count(Filter::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_query_pages_with_independent_total() {
        let store = MemoryStore::<Note>::new();
        for i in 0..5 {
            store.insert(note("u1", &format!("n{i}"))).await.unwrap();
        }
        store.insert(note("u2", "other")).await.unwrap();

        let filter = Filter::new().eq("owner", "u1");
        let page = store
            .query(Query::new(filter.clone()).page(1, 2))
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        let bodies: Vec<_> = page.items.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["n2", "n3"]);

        let last = store
            .query(Query::new(filter.clone()).page(2, 2))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);

        let empty = store.query(Query::new(filter).page(0, 0)).await.unwrap();
        assert!(empty.items.is_empty());
        assert_eq!(empty.total, 5);
    }

    #[tokio::test]
    async fn test_query_sorts_newest_first_with_id_tiebreak() {
        let store = MemoryStore::<Note>::new();
        let first = store.insert(note("u1", "first")).await.unwrap();
        let second = store.insert(note("u1", "second")).await.unwrap();

        // Force identical timestamps so only _id decides
        for stored in [&first, &second] {
            let id = stored.id().unwrap().to_hex();
            store
                .update_fields(&id, Patch::new().set(CREATED_AT, "2024-01-01T00:00:00.000Z"))
                .await
                .unwrap();
        }

        let page = store
            .query(
                Query::new(Filter::new())
                    .sort_by(Sort::desc(CREATED_AT))
                    .sort_by(Sort::desc("_id"))
                    .page(0, 10),
            )
            .await
            .unwrap();
        let bodies: Vec<_> = page.items.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["second", "first"]);
    }

    #[tokio::test]
    async fn test_count_distinct() {
        let store = MemoryStore::<Note>::new();
        assert_eq!(store.count_distinct(Filter::new(), "owner").await.unwrap(), 0);

        for owner in ["u1", "u2", "u1", "u3"] {
            store.insert(note(owner, "x")).await.unwrap();
        }
        assert_eq!(store.count_distinct(Filter::new(), "owner").await.unwrap(), 3);
        assert_eq!(
            store
                .count_distinct(Filter::new().ne("owner", "u3"), "owner")
                .await
                .unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn test_find_one_by_filter() {
        let store = MemoryStore::<Note>::new();
        store.insert(note("u1", "a")).await.unwrap();
        store.insert(note("u2", "b")).await.unwrap();

        let found = store.find_one(Filter::new().eq("owner", "u2")).await.unwrap();
        assert_eq!(found.map(|n| n.body), Some("b".to_string()));
        assert!(store
            .find_one(Filter::new().eq("owner", "u9"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let store = MemoryStore::<Note>::new();
        let shared = store.clone();
        store.set_unavailable(true);

        assert!(shared.insert(note("u1", "x")).await.unwrap_err().is_unavailable());
        assert!(shared.count(Filter::new()).await.unwrap_err().is_unavailable());

        store.set_unavailable(false);
        assert!(shared.insert(note("u1", "x")).await.is_ok());
        assert_eq!(store.raw_documents().unwrap().len(), 1);
    }
}
