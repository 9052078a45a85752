//! Web router using Axum
//!
//! Serves the built frontend and forwards actor calls from the browser to
//! the configured upstream actor.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use hookcraft_core::actor::ActorMethod;
use hookcraft_core::HttpTransport;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<HttpTransport>,
    pub dist_dir: PathBuf,
}

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = state.dist_dir.join("index.html");
    let frontend_built = index.exists();
    let dist_dir = state.dist_dir.clone();

    let router = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/actor/{method}", post(actor_handler))
        .layer(cors)
        .with_state(state);

    if frontend_built {
        // Unknown paths are SPA routes, answered with index.html
        router.fallback_service(ServeDir::new(dist_dir).not_found_service(ServeFile::new(index)))
    } else {
        router.fallback(placeholder_handler)
    }
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "upstream": state.upstream.base_url(),
        "frontend_built": state.dist_dir.join("index.html").exists(),
    }))
}

/// Forward one actor call, passing the upstream status and body through
async fn actor_handler(
    State(state): State<AppState>,
    Path(method): Path<String>,
    body: String,
) -> Response {
    let Some(method) = ActorMethod::parse(&method) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Unknown actor method: {}", method),
        );
    };

    debug!(%method, "Proxying actor call");

    match state.upstream.forward(method, body).await {
        Ok((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(err) => {
            warn!(%method, error = %err, "Actor upstream unreachable");
            error_response(StatusCode::BAD_GATEWAY, "unavailable", err.message)
        }
    }
}

fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    (status, Json(json!({ "code": code, "message": message }))).into_response()
}

async fn placeholder_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>hookcraft</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>hookcraft Web UI - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the web UI can be displayed.</p>
        <ol>
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/hookcraft-web && trunk build --release</code></li>
            <li>Restart server: <code>hookcraft web</code></li>
        </ol>
        <p>API available now: <a href="/api/health">/api/health</a>, <code>POST /api/actor/{method}</code></p>
    </div>
</body>
</html>"#,
    )
}
