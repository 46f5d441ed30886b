use crate::shared::infrastructure::record_store::{RecordId, RecordSchema, TaxonomySchema};
use serde::Serialize;

/// Record kind events are stored under.
pub const EVENT_KIND: &str = "event";

/// Hierarchical taxonomy holding event categories.
pub const EVENT_CATEGORY_TAXONOMY: &str = "event_category";

pub const META_EVENT_START_TIME: &str = "event_start_time";
pub const META_EVENT_END_TIME: &str = "event_end_time";

/// Schema the bootstrap registers with the record store before any
/// request is served.
pub fn event_schema() -> RecordSchema {
    RecordSchema {
        kind: EVENT_KIND.into(),
        taxonomies: vec![TaxonomySchema {
            name: EVENT_CATEGORY_TAXONOMY.into(),
            hierarchical: true,
        }],
    }
}

/// Denormalized read shape returned by show and list. Category holds
/// term names, not internal ids.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EventView {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub event_start_time: String,
    pub event_end_time: String,
    pub category: Vec<String>,
}
