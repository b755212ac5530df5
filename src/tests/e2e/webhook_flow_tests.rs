use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::{AppState, WebhookEventStore};
use crate::tests::fixtures::events::event_record::event_record_json;

fn app() -> Router {
    router(AppState::new(Arc::new(WebhookEventStore::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn post_webhook(body: impl Into<Body>) -> Request<Body> {
    Request::post("/webhook")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn receives_lists_and_fetches_a_webhook_event() {
    let app = app();

    let (status, body) = send(&app, post_webhook(event_record_json())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, get("/events")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(ids, json!(["evt-1"]));

    let (status, body) = send(&app, get("/events/evt-1")).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Value = serde_json::from_slice(&body).unwrap();
    let delivered: Value = serde_json::from_str(event_record_json()).unwrap();
    assert_eq!(fetched, delivered);

    let (status, _) = send(&app, get("/events/evt-missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn a_rejected_delivery_never_shows_up_in_the_event_list() {
    let app = app();

    let (status, _) = send(&app, post_webhook(r#"{"id":"evt-1","event":"oops"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, get("/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn a_redelivered_id_replaces_the_previous_event() {
    let app = app();
    let mut updated: Value = serde_json::from_str(event_record_json()).unwrap();
    updated["event"]["op"] = json!("UPDATE");
    updated["event"]["data"] = json!({"old": {"x": 1}, "new": {"x": 2}});

    send(&app, post_webhook(event_record_json())).await;
    let (status, _) = send(&app, post_webhook(updated.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/events")).await;
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!(["evt-1"]));

    let (_, body) = send(&app, get("/events/evt-1")).await;
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), updated);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deliveries_are_all_retrievable() {
    let app = app();
    let ids: Vec<String> = (0..32).map(|n| format!("evt-{n}")).collect();

    let deliveries: Vec<_> = ids
        .iter()
        .map(|id| {
            let app = app.clone();
            let body = json!({"id": id, "event": {"op": "INSERT", "data": {"old": null, "new": {"id": id}}}});
            tokio::spawn(async move { send(&app, post_webhook(body.to_string())).await.0 })
        })
        .collect();
    for delivery in deliveries {
        assert_eq!(delivery.await.unwrap(), StatusCode::OK);
    }

    let (_, body) = send(&app, get("/events")).await;
    let mut listed: Vec<String> = serde_json::from_slice(&body).unwrap();
    listed.sort();
    let mut expected = ids.clone();
    expected.sort();
    assert_eq!(listed, expected);

    for id in &ids {
        let (status, body) = send(&app, get(&format!("/events/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        let record: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(record["event"]["data"]["new"]["id"], json!(id));
    }
}
