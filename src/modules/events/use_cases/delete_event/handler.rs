use crate::modules::events::application::errors::EventApiError;
use crate::modules::events::application::resolve::resolve_event;
use crate::modules::events::use_cases::delete_event::command::DeleteEvent;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct DeleteEventHandler {
    store: Arc<dyn RecordStore>,
}

impl DeleteEventHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Permanently removes the event, its metadata and its category
    /// assignments. There is no trash state; a deleted id never resolves
    /// again.
    pub async fn handle(&self, command: DeleteEvent) -> Result<(), EventApiError> {
        let record = resolve_event(self.store.as_ref(), command.id.as_deref()).await?;
        self.store.delete_record(record.id).await?;
        Ok(())
    }
}
