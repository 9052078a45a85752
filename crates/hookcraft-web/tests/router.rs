//! Integration tests for the Axum router and actor proxy

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::Router;
use hookcraft_core::HttpTransport;
use hookcraft_web::{create_router, AppState};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;

fn router_for(upstream: &str) -> Router {
    let transport = HttpTransport::new(upstream, Duration::from_secs(2)).unwrap();
    create_router(AppState {
        upstream: Arc::new(transport),
        dist_dir: PathBuf::from("/nonexistent/hookcraft-dist"),
    })
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn actor_call(method: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/actor/{}", method))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Serve a fake actor on an ephemeral port and return its base URL
async fn spawn_upstream() -> String {
    let upstream = Router::new()
        .route(
            "/generateHooks",
            post(|body: String| async move {
                let value: serde_json::Value = serde_json::from_str(&body).unwrap();
                axum::Json(serde_json::json!([format!(
                    "Stop scrolling, {} fans",
                    value["args"][0]["niche"].as_str().unwrap_or("")
                )]))
            }),
        )
        .route(
            "/generateScripts",
            post(|| async {
                (
                    StatusCode::PAYMENT_REQUIRED,
                    axum::Json(serde_json::json!({
                        "code": "tier_required",
                        "message": "Scripts need Pro"
                    })),
                )
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = router_for("http://127.0.0.1:9");

    let response = router
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["frontend_built"], false);
}

#[tokio::test]
async fn test_unknown_actor_method_is_404() {
    let router = router_for("http://127.0.0.1:9");

    let response = router
        .oneshot(actor_call("dropAllTables", r#"{"args":[]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_unreachable_upstream_is_502() {
    let router = router_for("http://127.0.0.1:9");

    let response = router
        .oneshot(actor_call("checkUserTier", r#"{"args":[]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["code"], "unavailable");
}

#[tokio::test]
async fn test_proxy_passes_status_and_body_through() {
    let base = spawn_upstream().await;

    let response = router_for(&base)
        .oneshot(actor_call("generateHooks", r#"{"args":[{"niche":"fitness"}]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"["Stop scrolling, fitness fans"]"#);

    let response = router_for(&base)
        .oneshot(actor_call("generateScripts", r#"{"args":[{}]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["code"], "tier_required");
}

#[tokio::test]
async fn test_placeholder_page_when_frontend_not_built() {
    let router = router_for("http://127.0.0.1:9");

    let response = router
        .oneshot(Request::builder().uri("/pricing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Build Required"));
}
