// In memory implementation of the RecordStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep records in insertion order, with metadata and term assignments
//   keyed by record id.
// - Enforce that record kinds and taxonomies were registered up front.

use crate::shared::infrastructure::record_store::{
    MetaFilter, NewRecord, Record, RecordId, RecordPatch, RecordQuery, RecordSchema, RecordStore,
    RecordStoreError, TaxonomySchema,
};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    kinds: HashSet<String>,
    taxonomies: HashMap<String, TaxonomySchema>,
    terms: HashMap<String, Vec<String>>,
    records: Vec<Record>,
    metadata: HashMap<RecordId, HashMap<String, String>>,
    assignments: HashMap<RecordId, HashMap<String, Vec<String>>>,
}

#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
    offline: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.offline {
            return Err(RecordStoreError::Backend("record store offline".into()));
        }
        Ok(())
    }
}

fn matches(record: &Record, query: &RecordQuery, inner: &Inner) -> bool {
    if record.kind != query.kind {
        return false;
    }
    if let Some(status) = query.status
        && record.status != status
    {
        return false;
    }
    if let Some(MetaFilter { key, substring }) = &query.meta_like {
        let value = inner
            .metadata
            .get(&record.id)
            .and_then(|meta| meta.get(key));
        return value.is_some_and(|v| v.contains(substring.as_str()));
    }
    true
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn register_schema(&self, schema: RecordSchema) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        let mut inner = self.inner.write().await;
        inner.kinds.insert(schema.kind);
        for taxonomy in schema.taxonomies {
            inner.terms.entry(taxonomy.name.clone()).or_default();
            inner.taxonomies.insert(taxonomy.name.clone(), taxonomy);
        }
        Ok(())
    }

    async fn create_record(&self, record: NewRecord) -> Result<RecordId, RecordStoreError> {
        self.ensure_online()?;
        let mut inner = self.inner.write().await;
        if !inner.kinds.contains(&record.kind) {
            return Err(RecordStoreError::UnknownKind(record.kind));
        }
        let id = Uuid::now_v7();
        inner.records.push(Record {
            id,
            kind: record.kind,
            title: record.title,
            body: record.body,
            status: record.status,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update_record(
        &self,
        id: RecordId,
        patch: RecordPatch,
    ) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RecordStoreError::MissingRecord(id))?;
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(body) = patch.body {
            record.body = body;
        }
        Ok(())
    }

    async fn delete_record(&self, id: RecordId) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        let mut inner = self.inner.write().await;
        let position = inner
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(RecordStoreError::MissingRecord(id))?;
        inner.records.remove(position);
        inner.metadata.remove(&id);
        inner.assignments.remove(&id);
        Ok(())
    }

    async fn get_record(&self, id: RecordId) -> Result<Option<Record>, RecordStoreError> {
        self.ensure_online()?;
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn query_records(&self, query: &RecordQuery) -> Result<Vec<Record>, RecordStoreError> {
        self.ensure_online()?;
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .filter(|record| matches(record, query, &inner))
            .cloned()
            .collect())
    }

    async fn get_metadata(
        &self,
        id: RecordId,
        key: &str,
    ) -> Result<Option<String>, RecordStoreError> {
        self.ensure_online()?;
        let inner = self.inner.read().await;
        Ok(inner
            .metadata
            .get(&id)
            .and_then(|meta| meta.get(key))
            .cloned())
    }

    async fn set_metadata(
        &self,
        id: RecordId,
        key: &str,
        value: &str,
    ) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        let mut inner = self.inner.write().await;
        if !inner.records.iter().any(|r| r.id == id) {
            return Err(RecordStoreError::MissingRecord(id));
        }
        inner
            .metadata
            .entry(id)
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_terms(
        &self,
        id: RecordId,
        taxonomy: &str,
    ) -> Result<Vec<String>, RecordStoreError> {
        self.ensure_online()?;
        let inner = self.inner.read().await;
        if !inner.taxonomies.contains_key(taxonomy) {
            return Err(RecordStoreError::UnknownTaxonomy(taxonomy.to_string()));
        }
        Ok(inner
            .assignments
            .get(&id)
            .and_then(|by_taxonomy| by_taxonomy.get(taxonomy))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_terms(
        &self,
        id: RecordId,
        taxonomy: &str,
        terms: &[String],
    ) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        let mut inner = self.inner.write().await;
        if !inner.taxonomies.contains_key(taxonomy) {
            return Err(RecordStoreError::UnknownTaxonomy(taxonomy.to_string()));
        }
        if !inner.records.iter().any(|r| r.id == id) {
            return Err(RecordStoreError::MissingRecord(id));
        }
        let known = inner.terms.entry(taxonomy.to_string()).or_default();
        for term in terms {
            if !known.contains(term) {
                known.push(term.clone());
            }
        }
        inner
            .assignments
            .entry(id)
            .or_default()
            .insert(taxonomy.to_string(), terms.to_vec());
        Ok(())
    }
}
