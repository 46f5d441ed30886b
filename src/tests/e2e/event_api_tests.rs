use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::authorization::static_tokens::StaticTokenAuthorizer;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::stores::event_store;

const ADMIN_TOKEN: &str = "e2e-admin-token";

async fn admin_state() -> AppState {
    AppState::new(
        Arc::new(event_store().await),
        Arc::new(StaticTokenAuthorizer::new([ADMIN_TOKEN.to_string()])),
    )
}

fn post(path: &str, body: String) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {ADMIN_TOKEN}"))
        .body(Body::from(body))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::get(path)
        .header("authorization", format!("Bearer {ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn manages_an_event_through_its_whole_lifecycle() {
    let app = router(admin_state().await);

    // create
    let response = app
        .clone()
        .oneshot(post(
            "/events/create",
            r#"{"title":"Launch day","description":"Release 2.0 goes out.","event_start_time":"2024-05-17 09:00:00","event_end_time":"2024-05-17 18:00:00","category":"milestones"}"#.into(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response).await;
    assert_eq!(created["success"], true);
    let id = created["id"].as_str().unwrap().to_string();

    // show returns what was submitted
    let response = app
        .clone()
        .oneshot(get(&format!("/events/show?id={id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = json_body(response).await;
    assert_eq!(view["title"], "Launch day");
    assert_eq!(view["description"], "Release 2.0 goes out.");
    assert_eq!(view["event_start_time"], "2024-05-17 09:00:00");
    assert_eq!(view["event_end_time"], "2024-05-17 18:00:00");
    assert_eq!(view["category"], serde_json::json!(["milestones"]));

    // partial update: empty description must not clear the stored one
    let response = app
        .clone()
        .oneshot(post(
            "/events/update",
            format!(r#"{{"id":"{id}","title":"Launch day (moved)","description":"","category":"company-wide"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(&format!("/events/show?id={id}")))
        .await
        .unwrap();
    let view = json_body(response).await;
    assert_eq!(view["title"], "Launch day (moved)");
    assert_eq!(view["description"], "Release 2.0 goes out.");
    assert_eq!(view["category"], serde_json::json!(["company-wide"]));

    // list with and without the date filter
    let response = app.clone().oneshot(get("/events/list")).await.unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(get("/events/list?date=2024-05"))
        .await
        .unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(get("/events/list?date=2024-06"))
        .await
        .unwrap();
    assert_eq!(json_body(response).await, serde_json::json!([]));

    // delete is permanent
    let response = app
        .clone()
        .oneshot(post("/events/delete", format!(r#"{{"id":"{id}"}}"#)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["success"], true);

    let response = app
        .clone()
        .oneshot(get(&format!("/events/show?id={id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "not_found");
}

#[tokio::test]
async fn rejects_callers_without_the_administrator_capability() {
    let app = router(admin_state().await);

    let anonymous = [
        Request::post("/events/create")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap(),
        Request::get("/events/list").body(Body::empty()).unwrap(),
        Request::get("/events/show?id=x").body(Body::empty()).unwrap(),
    ];
    for request in anonymous {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response).await["code"], "forbidden");
    }

    let wrong_token = Request::post("/events/delete")
        .header("content-type", "application/json")
        .header("authorization", "Bearer wrong-token")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.clone().oneshot(wrong_token).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
