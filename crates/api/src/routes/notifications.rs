//! Notification feed routes.
//!
//! Read side of the fire-and-forget notification sink; the reporting surface
//! polls this.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::routes::error_response;
use crate::AppState;
use nagorik_db::NotificationRepository;

/// Creates the administrator notification routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin/notifications", get(list))
}

/// GET /admin/notifications - List notifications, newest first.
async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let repo = NotificationRepository::new((*state.db).clone());
    match repo.list().await {
        Ok(notifications) => (StatusCode::OK, Json(notifications)).into_response(),
        Err(e) => error_response(500, "DATABASE_ERROR", &e.to_string()),
    }
}
