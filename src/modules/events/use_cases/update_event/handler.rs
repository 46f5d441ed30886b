use crate::modules::events::application::errors::EventApiError;
use crate::modules::events::application::resolve::resolve_event;
use crate::modules::events::core::model::{
    EVENT_CATEGORY_TAXONOMY, META_EVENT_END_TIME, META_EVENT_START_TIME,
};
use crate::modules::events::core::validate::non_empty;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shared::infrastructure::record_store::{RecordPatch, RecordStore};
use std::sync::Arc;

pub struct UpdateEventHandler {
    store: Arc<dyn RecordStore>,
}

impl UpdateEventHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Applies the non-empty fields of the payload to an existing event.
    /// No required-field check runs here; an update is inherently
    /// partial. A provided category replaces the previous assignment.
    pub async fn handle(&self, command: UpdateEvent) -> Result<(), EventApiError> {
        let record = resolve_event(self.store.as_ref(), command.id.as_deref()).await?;

        self.store
            .update_record(
                record.id,
                RecordPatch {
                    title: non_empty(command.title),
                    body: non_empty(command.description),
                },
            )
            .await?;

        if let Some(start) = non_empty(command.event_start_time) {
            self.store
                .set_metadata(record.id, META_EVENT_START_TIME, &start)
                .await?;
        }
        if let Some(end) = non_empty(command.event_end_time) {
            self.store
                .set_metadata(record.id, META_EVENT_END_TIME, &end)
                .await?;
        }
        if let Some(category) = non_empty(command.category) {
            self.store
                .set_terms(record.id, EVENT_CATEGORY_TAXONOMY, &[category])
                .await?;
        }

        Ok(())
    }
}
