use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_start_time: Option<String>,
    pub event_end_time: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateEventResponse {
    pub success: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateEvent {
        id: body.id,
        title: body.title,
        description: body.description,
        event_start_time: body.event_start_time,
        event_end_time: body.event_end_time,
        category: body.category,
    };

    match state.update_handler.handle(command).await {
        Ok(()) => Json(UpdateEventResponse { success: true }).into_response(),
        Err(err) => err.into_response(),
    }
}
