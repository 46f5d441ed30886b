// Port over the host document store: record CRUD, key/value metadata and
// taxonomy term assignment. Adapters implement this against a concrete
// backend; the in_memory module covers tests and local development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

pub type RecordId = Uuid;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("unknown record kind: {0}")]
    UnknownKind(String),

    #[error("unknown taxonomy: {0}")]
    UnknownTaxonomy(String),

    #[error("no record with id {0}")]
    MissingRecord(RecordId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Published,
    Draft,
}

#[derive(Debug, Clone)]
pub struct Record {
    pub id: RecordId,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRecord {
    pub kind: String,
    pub title: String,
    pub body: String,
    pub status: RecordStatus,
}

/// Partial record update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Substring match against one metadata key.
#[derive(Debug, Clone)]
pub struct MetaFilter {
    pub key: String,
    pub substring: String,
}

#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub kind: String,
    pub status: Option<RecordStatus>,
    pub meta_like: Option<MetaFilter>,
}

#[derive(Debug, Clone)]
pub struct TaxonomySchema {
    pub name: String,
    pub hierarchical: bool,
}

/// Registered up front by the application bootstrap; creating records of
/// an unregistered kind is an error.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub kind: String,
    pub taxonomies: Vec<TaxonomySchema>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn register_schema(&self, schema: RecordSchema) -> Result<(), RecordStoreError>;

    async fn create_record(&self, record: NewRecord) -> Result<RecordId, RecordStoreError>;

    async fn update_record(&self, id: RecordId, patch: RecordPatch)
    -> Result<(), RecordStoreError>;

    /// Permanent removal of the record, its metadata and its term
    /// assignments. There is no trash state to restore from.
    async fn delete_record(&self, id: RecordId) -> Result<(), RecordStoreError>;

    async fn get_record(&self, id: RecordId) -> Result<Option<Record>, RecordStoreError>;

    /// Matching records in insertion order.
    async fn query_records(&self, query: &RecordQuery) -> Result<Vec<Record>, RecordStoreError>;

    async fn get_metadata(
        &self,
        id: RecordId,
        key: &str,
    ) -> Result<Option<String>, RecordStoreError>;

    async fn set_metadata(
        &self,
        id: RecordId,
        key: &str,
        value: &str,
    ) -> Result<(), RecordStoreError>;

    async fn get_terms(&self, id: RecordId, taxonomy: &str)
    -> Result<Vec<String>, RecordStoreError>;

    /// Replaces the record's whole assignment for the taxonomy. Terms
    /// that do not exist yet are created in the taxonomy.
    async fn set_terms(
        &self,
        id: RecordId,
        taxonomy: &str,
        terms: &[String],
    ) -> Result<(), RecordStoreError>;
}

pub mod in_memory;
