use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shared::infrastructure::record_store::RecordId;

pub struct UpdateEventBuilder {
    inner: UpdateEvent,
}

#[allow(dead_code)]
impl UpdateEventBuilder {
    pub fn new(id: RecordId) -> Self {
        Self {
            inner: UpdateEvent {
                id: Some(id.to_string()),
                ..UpdateEvent::default()
            },
        }
    }

    pub fn raw_id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = Some(v.into());
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn event_start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.event_start_time = Some(v.into());
        self
    }

    pub fn event_end_time(mut self, v: impl Into<String>) -> Self {
        self.inner.event_end_time = Some(v.into());
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = Some(v.into());
        self
    }

    pub fn build(self) -> UpdateEvent {
        self.inner
    }
}
