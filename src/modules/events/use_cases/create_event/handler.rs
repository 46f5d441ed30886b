use crate::modules::events::application::errors::EventApiError;
use crate::modules::events::core::model::{
    EVENT_CATEGORY_TAXONOMY, EVENT_KIND, META_EVENT_END_TIME, META_EVENT_START_TIME,
};
use crate::modules::events::core::validate::{non_empty, validate_required};
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::infrastructure::record_store::{
    NewRecord, RecordId, RecordStatus, RecordStore,
};
use std::sync::Arc;

pub struct CreateEventHandler {
    store: Arc<dyn RecordStore>,
}

impl CreateEventHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validates the payload, inserts a published record and attaches the
    /// time metadata and optional category. The record is visible to
    /// queries as soon as the insert lands.
    pub async fn handle(&self, command: CreateEvent) -> Result<RecordId, EventApiError> {
        validate_required(&command).map_err(EventApiError::MissingField)?;

        let id = self
            .store
            .create_record(NewRecord {
                kind: EVENT_KIND.into(),
                title: command.title,
                body: command.description,
                status: RecordStatus::Published,
            })
            .await?;

        self.store
            .set_metadata(id, META_EVENT_START_TIME, &command.event_start_time)
            .await?;
        self.store
            .set_metadata(id, META_EVENT_END_TIME, &command.event_end_time)
            .await?;

        if let Some(category) = non_empty(command.category) {
            self.store
                .set_terms(id, EVENT_CATEGORY_TAXONOMY, &[category])
                .await?;
        }

        Ok(id)
    }
}
