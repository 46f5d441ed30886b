use crate::modules::events::core::model::event_schema;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;

/// Fresh in-memory store with the event schema already registered, the
/// way the application bootstrap leaves it.
pub async fn event_store() -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();
    store
        .register_schema(event_schema())
        .await
        .expect("schema registration failed");
    store
}
