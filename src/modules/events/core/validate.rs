use crate::modules::events::use_cases::create_event::command::CreateEvent;

/// Checks the create payload for required fields. The check order is
/// fixed and the first empty field wins; error messages must stay
/// deterministic across runs.
pub fn validate_required(command: &CreateEvent) -> Result<(), &'static str> {
    let fields: [(&'static str, &str); 4] = [
        ("title", &command.title),
        ("event_start_time", &command.event_start_time),
        ("event_end_time", &command.event_end_time),
        ("description", &command.description),
    ];
    for (name, value) in fields {
        if value.is_empty() {
            return Err(name);
        }
    }
    Ok(())
}

/// Partial-update normalization: an empty string means "leave the stored
/// value unchanged", same as an absent field.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
