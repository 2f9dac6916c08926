use axum::body::Body;
use axum::http::{Request, StatusCode};
use deepracer_telemetry::interfaces::http::router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    let response = router().oneshot(request).await.expect("route request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("parse JSON body");
    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_performance_data_for_known_model() {
    let (status, body) = get("/performance-data?model_id=model-v1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"]["best_lap_time"], 22.8);
    assert_eq!(body["metrics"]["avg_completion"], 68.5);
    assert_eq!(body["lap_times"].as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn test_missing_query_defaults_to_v2() {
    let (status, default_body) = get("/performance-data").await;
    assert_eq!(status, StatusCode::OK);
    let (_, v2_body) = get("/performance-data?model_id=model-v2").await;
    assert_eq!(default_body, v2_body);
    assert_eq!(default_body["metrics"]["best_lap_time"], 18.2);
}

#[tokio::test]
async fn test_unknown_model_falls_back_without_error() {
    let (status, body) = get("/performance-data?model_id=no-such-model").await;
    assert_eq!(status, StatusCode::OK);
    let (_, v2_body) = get("/performance-data?model_id=model-v2").await;
    assert_eq!(body, v2_body);
}

#[tokio::test]
async fn test_list_models_endpoint() {
    let (status, body) = get("/models").await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().expect("array");
    assert_eq!(entries.len(), 3);

    let ids: Vec<&str> = entries
        .iter()
        .map(|e| e["model_id"].as_str().expect("string"))
        .collect();
    assert_eq!(ids, ["model-v1", "model-v2", "model-v3"]);

    let v3 = &entries[2];
    assert_eq!(v3["data"]["metrics"]["best_lap_time"], 15.6);
}

#[tokio::test]
async fn test_list_entries_match_single_lookups() {
    let (_, models) = get("/models").await;
    for entry in models.as_array().expect("array") {
        let id = entry["model_id"].as_str().expect("string");
        let (_, single) = get(&format!("/performance-data?model_id={id}")).await;
        assert_eq!(entry["data"], single, "bundle for {id}");
    }
}
