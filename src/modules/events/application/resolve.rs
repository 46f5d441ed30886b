use crate::modules::events::application::errors::EventApiError;
use crate::modules::events::core::model::EVENT_KIND;
use crate::shared::infrastructure::record_store::{Record, RecordId, RecordStore};

/// Resolves a raw id from a request to an existing event record.
///
/// Absent or empty ids are `MissingId`; anything that does not parse or
/// does not name an event record (including records of another kind) is
/// `InvalidId`.
pub async fn resolve_event(
    store: &dyn RecordStore,
    raw_id: Option<&str>,
) -> Result<Record, EventApiError> {
    let raw = raw_id
        .filter(|id| !id.is_empty())
        .ok_or(EventApiError::MissingId)?;
    let id: RecordId = raw.parse().map_err(|_| EventApiError::InvalidId)?;
    store
        .get_record(id)
        .await?
        .filter(|record| record.kind == EVENT_KIND)
        .ok_or(EventApiError::InvalidId)
}
