/// Payload of the create operation. All string fields are required and
/// checked by `core::validate`; `category` is an optional single label.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub event_start_time: String,
    pub event_end_time: String,
    pub category: Option<String>,
}
