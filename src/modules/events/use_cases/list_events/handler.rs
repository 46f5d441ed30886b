use crate::modules::events::adapters::mappers::record_to_event_view::denormalize_event;
use crate::modules::events::application::errors::EventApiError;
use crate::modules::events::core::model::{EVENT_KIND, EventView, META_EVENT_START_TIME};
use crate::shared::infrastructure::record_store::{
    MetaFilter, RecordQuery, RecordStatus, RecordStore,
};
use std::sync::Arc;

pub struct ListEventsHandler {
    store: Arc<dyn RecordStore>,
}

impl ListEventsHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns every published event, in store order, without pagination.
    /// The date filter is a plain substring match against the start time
    /// metadata, never a parsed date comparison.
    pub async fn handle(&self, date_filter: Option<&str>) -> Result<Vec<EventView>, EventApiError> {
        let meta_like = date_filter
            .filter(|date| !date.is_empty())
            .map(|date| MetaFilter {
                key: META_EVENT_START_TIME.into(),
                substring: date.into(),
            });

        let records = self
            .store
            .query_records(&RecordQuery {
                kind: EVENT_KIND.into(),
                status: Some(RecordStatus::Published),
                meta_like,
            })
            .await?;

        let mut views = Vec::with_capacity(records.len());
        for record in records {
            views.push(denormalize_event(self.store.as_ref(), record).await?);
        }
        Ok(views)
    }
}
