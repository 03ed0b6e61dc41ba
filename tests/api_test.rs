//! End-to-end tests for the poll API.
//!
//! Each test drives the router directly with `tower::ServiceExt::oneshot`;
//! no listening socket is needed.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pollbox::polls::create_store;
use pollbox::server::{router, AppState};

fn app() -> Router {
    router(AppState {
        store: create_store(),
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_poll_returns_created() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/polls",
            json!({"pollId": "p1", "options": ["yes", "no"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "created");
    assert_eq!(body["pollId"], "p1");
}

#[tokio::test]
async fn duplicate_poll_conflicts() {
    let app = app();

    let first = app
        .clone()
        .oneshot(post_json(
            "/polls",
            json!({"pollId": "p1", "options": ["yes", "no"]}),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(post_json(
            "/polls",
            json!({"pollId": "p1", "options": ["red", "blue"]}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    // First creation's option set survives.
    let results = app
        .oneshot(get("/results?pollId=p1"))
        .await
        .unwrap();
    let body = body_json(results).await;
    assert!(body["results"].get("yes").is_some());
    assert!(body["results"].get("red").is_none());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/polls")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid request");
}

#[tokio::test]
async fn empty_options_are_rejected() {
    let app = app();

    let response = app
        .oneshot(post_json("/polls", json!({"pollId": "p1", "options": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_poll_id_is_rejected() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/polls",
            json!({"pollId": "", "options": ["yes"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vote_and_results_flow() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/polls",
            json!({"pollId": "p1", "options": ["yes", "no"]}),
        ))
        .await
        .unwrap();

    for option in ["yes", "yes", "no"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/votes",
                json!({"pollId": "p1", "option": option}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "vote cast");
    }

    let response = app.oneshot(get("/results?pollId=p1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pollId"], "p1");
    assert_eq!(body["results"]["yes"], 2);
    assert_eq!(body["results"]["no"], 1);
}

#[tokio::test]
async fn vote_for_unknown_poll_is_not_found() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/votes",
            json!({"pollId": "ghost", "option": "yes"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vote_for_unknown_option_is_rejected() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/polls",
            json!({"pollId": "p1", "options": ["yes", "no"]}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/votes",
            json!({"pollId": "p1", "option": "maybe"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // No counts were touched.
    let results = app.oneshot(get("/results?pollId=p1")).await.unwrap();
    let body = body_json(results).await;
    assert_eq!(body["results"]["yes"], 0);
    assert_eq!(body["results"]["no"], 0);
}

#[tokio::test]
async fn results_require_poll_id() {
    let app = app();

    let response = app.oneshot(get("/results")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "pollId required");
}

#[tokio::test]
async fn results_for_unknown_poll_are_not_found() {
    let app = app();

    let response = app.oneshot(get("/results?pollId=ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_poll_count() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/polls",
            json!({"pollId": "p1", "options": ["yes", "no"]}),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["polls"], 1);
}
