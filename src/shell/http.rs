use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::adapters::inbound::http::error_response;
use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::show_event::inbound::http as show_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shared::infrastructure::authorization::{Capability, Principal};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events/create", post(create_http::handle))
        .route("/events/update", post(update_http::handle))
        .route("/events/delete", post(delete_http::handle))
        .route("/events/show", get(show_http::handle))
        .route("/events/list", get(list_http::handle))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_administrator,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn principal_from(request: &Request) -> Principal {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(Principal::with_token)
        .unwrap_or_else(Principal::anonymous)
}

/// Gate in front of every route: the capability check runs before any
/// gateway logic, and a denial never touches the store.
async fn require_administrator(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let principal = principal_from(&request);
    if state
        .authorizer
        .allows(&principal, Capability::ManageEvents)
        .await
    {
        next.run(request).await
    } else {
        tracing::debug!("rejected caller without the administrator capability");
        error_response(
            StatusCode::FORBIDDEN,
            "forbidden",
            "administrator capability required",
        )
    }
}
