use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::user::{User, UserPayload};
use crate::state::AppState;
use crate::users::validation::validate_payload;

/// Parses an `:id` path segment. Anything that is not a positive integer
/// cannot name an existing user, so it reports not-found rather than a
/// server error.
fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("User with id {raw} not found")))
}

/// GET /api/users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

/// GET /api/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_user_id(&id)?;
    let user = state.store.get_user(id).await?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let (name, email) = validate_payload(&payload)?;
    let user = state.store.create_user(&name, &email).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/:id
pub async fn handle_update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, AppError> {
    let id = parse_user_id(&id)?;
    let (name, email) = validate_payload(&payload)?;
    let user = state.store.update_user(id, &name, &email).await?;
    Ok(Json(user))
}

/// DELETE /api/users/:id
pub async fn handle_delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_user_id(&id)?;
    state.store.delete_user(id).await?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
