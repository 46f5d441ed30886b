use crate::modules::events::adapters::mappers::record_to_event_view::denormalize_event;
use crate::modules::events::application::errors::EventApiError;
use crate::modules::events::application::resolve::resolve_event;
use crate::modules::events::core::model::EventView;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct ShowEventHandler {
    store: Arc<dyn RecordStore>,
}

impl ShowEventHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the denormalized view of one event. Unlike update and
    /// delete, a read makes no distinction between a missing, malformed
    /// or unknown id: everything that does not resolve is "not found".
    pub async fn handle(&self, raw_id: Option<&str>) -> Result<EventView, EventApiError> {
        let record = resolve_event(self.store.as_ref(), raw_id)
            .await
            .map_err(|err| match err {
                EventApiError::MissingId | EventApiError::InvalidId => EventApiError::NotFound,
                other => other,
            })?;
        Ok(denormalize_event(self.store.as_ref(), record).await?)
    }
}
