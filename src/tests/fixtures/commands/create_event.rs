use crate::modules::events::use_cases::create_event::command::CreateEvent;

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateEvent {
                title: "Platform weekly".into(),
                description: "Weekly sync with the platform team.".into(),
                event_start_time: "2024-05-01 10:00:00".into(),
                event_end_time: "2024-05-01 11:00:00".into(),
                category: None,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn event_start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.event_start_time = v.into();
        self
    }

    pub fn event_end_time(mut self, v: impl Into<String>) -> Self {
        self.inner.event_end_time = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = Some(v.into());
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}
