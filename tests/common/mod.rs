#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-api-key";

/// A request received by the mock catalog
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub action: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
}

/// In-process stand-in for the catalog action API.
///
/// Names starting with `taken` fail validation, ids starting with `missing`
/// are not found, a wrong API key is rejected and the `broken` action answers
/// with a non-JSON body.
pub struct MockCatalog {
    pub base_url: String,
    state: MockState,
}

impl MockCatalog {
    pub async fn start() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind mock catalog")?;

        let state = MockState::default();
        let app = Router::new()
            .route("/api/action/:action", post(action))
            .with_state(state.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
        })
    }

    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.state.calls.lock().unwrap().clone()
    }
}

async fn action(
    State(state): State<MockState>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.calls.lock().unwrap().push(ReceivedCall {
        action: action.clone(),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    if authorization.as_deref() != Some(API_KEY) {
        return failure(
            StatusCode::FORBIDDEN,
            json!({"__type": "Authorization Error", "message": "Access denied"}),
        );
    }

    if action == "broken" {
        return (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response();
    }

    let name = body.get("name").and_then(Value::as_str).unwrap_or_default().to_string();
    let id = body.get("id").and_then(Value::as_str).unwrap_or_default().to_string();

    if name.starts_with("taken") {
        return failure(
            StatusCode::CONFLICT,
            json!({"__type": "Validation Error", "name": ["Group name already exists in database"]}),
        );
    }

    if action == "organization_patch" && id.starts_with("missing") {
        return failure(
            StatusCode::NOT_FOUND,
            json!({"__type": "Not Found Error", "message": "Organization was not found"}),
        );
    }

    let mut result = body;
    if let Some(obj) = result.as_object_mut() {
        obj.entry("id").or_insert_with(|| json!(format!("{}-id", name)));
    }

    Json(json!({"help": "mock", "success": true, "result": result})).into_response()
}

fn failure(status: StatusCode, error: Value) -> Response {
    (status, Json(json!({"help": "mock", "success": false, "error": error}))).into_response()
}

/// Unique path under the system temp dir
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ridl-{}-{}", uuid::Uuid::new_v4().simple(), name))
}
