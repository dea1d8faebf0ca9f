use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/health
/// Round-trips a trivial query so orchestration probes see 503 when the
/// store is unreachable, not a false 200.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.health_check().await?;
    Ok(Json(json!({
        "status": "OK",
        "message": "Server is running"
    })))
}
