pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::users::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/users",
            get(handlers::handle_list_users).post(handlers::handle_create_user),
        )
        .route(
            "/api/users/:id",
            get(handlers::handle_get_user)
                .put(handlers::handle_update_user)
                .delete(handlers::handle_delete_user),
        )
        .with_state(state)
}
