/// Payload of the update operation. Only fields that arrive non-empty
/// are applied; everything else keeps its stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_start_time: Option<String>,
    pub event_end_time: Option<String>,
    pub category: Option<String>,
}
