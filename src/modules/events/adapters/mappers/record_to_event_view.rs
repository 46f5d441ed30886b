use crate::modules::events::core::model::{
    EVENT_CATEGORY_TAXONOMY, EventView, META_EVENT_END_TIME, META_EVENT_START_TIME,
};
use crate::shared::infrastructure::record_store::{Record, RecordStore, RecordStoreError};

/// Joins a stored record with its time metadata and category terms into
/// the wire shape. Metadata that was never written reads as the empty
/// string.
pub async fn denormalize_event(
    store: &dyn RecordStore,
    record: Record,
) -> Result<EventView, RecordStoreError> {
    let event_start_time = store
        .get_metadata(record.id, META_EVENT_START_TIME)
        .await?
        .unwrap_or_default();
    let event_end_time = store
        .get_metadata(record.id, META_EVENT_END_TIME)
        .await?
        .unwrap_or_default();
    let category = store.get_terms(record.id, EVENT_CATEGORY_TAXONOMY).await?;

    Ok(EventView {
        id: record.id,
        title: record.title,
        description: record.body,
        event_start_time,
        event_end_time,
        category,
    })
}
