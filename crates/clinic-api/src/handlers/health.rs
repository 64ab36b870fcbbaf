//! Health check handler.

use axum::Json;
use serde_json::{Value, json};

/// GET /api/auth/healthcheck
///
/// Open endpoint used by load balancers and deployment probes.
pub async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}
