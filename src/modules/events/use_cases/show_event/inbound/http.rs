use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ShowEventParams {
    pub id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ShowEventParams>,
) -> impl IntoResponse {
    match state.show_handler.handle(params.id.as_deref()).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}
