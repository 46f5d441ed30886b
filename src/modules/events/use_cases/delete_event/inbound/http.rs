use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::use_cases::delete_event::command::DeleteEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteEventBody {
    pub id: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub success: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .delete_handler
        .handle(DeleteEvent { id: body.id })
        .await
    {
        Ok(()) => Json(DeleteEventResponse { success: true }).into_response(),
        Err(err) => err.into_response(),
    }
}
