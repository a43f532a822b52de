//! HTTP contract of the `/search` endpoint, driven through the router
//! without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use bisect_app::http::{router, AppState, INVALID_INPUT_MESSAGE};
use bisect_search::policy::NormalizePolicyV1;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post(state: AppState, body: &str) -> (StatusCode, Value) {
    let request = Request::post("/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn sorted_request_matches_wire_shape() {
    let (status, body) = post(AppState::default(), r#"{"array":[3,4,5,6,7],"target":6}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "steps": [
                {"low": 0, "mid": 2, "high": 4, "midValue": 5, "found": false},
                {"low": 3, "mid": 3, "high": 4, "midValue": 6, "found": true}
            ],
            "sorted": true,
            "result": 3,
            "results": [3]
        })
    );
}

#[tokio::test]
async fn unsorted_request_reports_sorted_false() {
    let (status, body) = post(AppState::default(), r#"{"array":[3,4,6,2,1],"target":4}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sorted"], false);
    assert_eq!(body["result"], 3);
}

#[tokio::test]
async fn target_below_minimum_is_not_found() {
    let (status, body) = post(AppState::default(), r#"{"array":[10,20,30],"target":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "steps": [
                {"low": 0, "mid": 1, "high": 2, "midValue": 20, "found": false},
                {"low": 0, "mid": 0, "high": 0, "midValue": 10, "found": false}
            ],
            "sorted": true,
            "result": -1,
            "results": []
        })
    );
}

#[tokio::test]
async fn numeric_strings_and_floats_are_accepted() {
    let (status, body) =
        post(AppState::default(), r#"{"array":["1.5","2",3.0],"target":"3"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 2);
    assert_eq!(body["steps"][0]["midValue"], 2);
}

#[tokio::test]
async fn rejections_are_400_with_error_message() {
    for payload in [
        r#"{"array":["a","b"],"target":1}"#,
        r#"{"array":[1,2],"target":"x"}"#,
        r#"{"array":[1,2]}"#,
        r#"{"array":[1,2],"target":null}"#,
        r#"{"array":"1 2 3","target":1}"#,
        "not json",
    ] {
        let (status, body) = post(AppState::default(), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["error"], INVALID_INPUT_MESSAGE, "{payload}");
        assert!(body.get("steps").is_none());
    }
}

#[tokio::test]
async fn length_limit_comes_from_state() {
    let state = AppState {
        policy: NormalizePolicyV1::with_max_len(3),
        trace_steps: false,
    };
    let (status, _) = post(state.clone(), r#"{"array":[1,2,3],"target":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = post(state, r#"{"array":[1,2,3,4],"target":1}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains('4'));
}

#[tokio::test]
async fn missing_array_is_empty_search() {
    let (status, body) = post(AppState::default(), r#"{"target":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"steps": [], "sorted": true, "result": -1, "results": []}));
}
