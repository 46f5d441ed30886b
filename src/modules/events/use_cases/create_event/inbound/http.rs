use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::infrastructure::record_store::RecordId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub event_start_time: String,
    #[serde(default)]
    pub event_end_time: String,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct CreateEventResponse {
    pub success: bool,
    pub id: RecordId,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateEvent {
        title: body.title,
        description: body.description,
        event_start_time: body.event_start_time,
        event_end_time: body.event_end_time,
        category: body.category,
    };

    match state.create_handler.handle(command).await {
        Ok(id) => Json(CreateEventResponse { success: true, id }).into_response(),
        Err(err) => err.into_response(),
    }
}
