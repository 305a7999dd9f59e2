//! REST endpoints for the classifier.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::classifier::Classifier;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
}

/// Build the router with all classifier routes (no middleware).
pub fn classifier_routes(classifier: Arc<Classifier>) -> Router {
    let state = AppState { classifier };

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/classify", post(classify_email))
        .route("/batch-classify", post(batch_classify))
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Parse a request body as JSON regardless of its content type.
fn parse_body(body: &Bytes) -> Result<Value, Response> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Malformed request body");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Invalid JSON body: {e}"))
    })
}

/// JSON values that count as "nothing provided".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

// ── Metadata ────────────────────────────────────────────────────────────

async fn home() -> impl IntoResponse {
    Json(json!({
        "service": "Smart Email Classifier API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/classify": "POST - Classify email",
            "/batch-classify": "POST - Classify multiple emails",
            "/health": "GET - Health check"
        }
    }))
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "email-classifier"
    }))
}

// ── Classification ──────────────────────────────────────────────────────

/// Validation failures answer 200 with an error object; other failures 500.
async fn classify_email(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match parse_body(&body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.classifier.classify(&payload) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) if e.is_validation() => {
            warn!(error = %e, "Rejected email payload");
            error_response(StatusCode::OK, e.to_string())
        }
        Err(e) => {
            warn!(error = %e, "Classification failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn batch_classify(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match parse_body(&body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let Some(obj) = payload.as_object() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Request body must be a JSON object",
        );
    };

    let emails = match obj.get("emails") {
        None => return error_response(StatusCode::BAD_REQUEST, "No emails provided"),
        Some(v) if is_blank(v) => {
            return error_response(StatusCode::BAD_REQUEST, "No emails provided");
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "'emails' must be an array",
            );
        }
    };

    let outcome = state.classifier.classify_batch(emails);
    info!(
        total = outcome.total,
        failed = outcome.total - outcome.summary.classified(),
        "Batch classified"
    );

    (StatusCode::OK, Json(outcome)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    async fn call(method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let app = classifier_routes(Arc::new(Classifier::new()));
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!([])));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!(0)));
        assert!(!is_blank(&json!([{}])));
        assert!(!is_blank(&json!("x")));
    }

    #[tokio::test]
    async fn home_lists_endpoints() {
        let (status, body) = call("GET", "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["endpoints"]["/batch-classify"].is_string());
    }

    #[tokio::test]
    async fn classify_without_content_type() {
        let (status, body) = call("POST", "/classify", r#"{"subject": "hi"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "general");
    }

    #[tokio::test]
    async fn classify_bad_field_type_is_server_error() {
        let (status, body) = call("POST", "/classify", r#"{"subject": 5}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Field 'subject' must be a string");
    }

    #[tokio::test]
    async fn batch_requires_object_body() {
        let (status, _) = call("POST", "/batch-classify", "[1, 2]").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn batch_rejects_non_array_emails() {
        let (status, body) = call("POST", "/batch-classify", r#"{"emails": "x"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "'emails' must be an array");
    }

    #[tokio::test]
    async fn batch_null_emails_is_bad_request() {
        let (status, body) = call("POST", "/batch-classify", r#"{"emails": null}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No emails provided");
    }

    #[tokio::test]
    async fn batch_field_type_errors_stay_in_results() {
        let (status, body) = call(
            "POST",
            "/batch-classify",
            r#"{"emails": [{"subject": "ok"}, {"subject": ["nope"]}]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["results"][1]["error"], "Field 'subject' must be a string");
        assert_eq!(body["summary"]["general"], 1);
    }
}
