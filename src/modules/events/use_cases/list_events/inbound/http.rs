use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    match state.list_handler.handle(params.date.as_deref()).await {
        Ok(views) => Json(views).into_response(),
        Err(err) => err.into_response(),
    }
}
