//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, middleware::auth::auth_middleware};

pub mod auth;
pub mod certificate_types;
pub mod certificates;
pub mod citizens;
pub mod health;
pub mod notifications;
pub mod tax;
pub mod verify;

/// Creates the API router: public routes plus the administrator surface
/// behind the session middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(citizens::admin_routes())
        .merge(certificates::admin_routes())
        .merge(certificate_types::admin_routes())
        .merge(notifications::routes())
        .merge(tax::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(citizens::routes())
        .merge(certificates::routes())
        .merge(certificate_types::routes())
        .merge(verify::routes())
        .merge(protected_routes)
}

/// Renders a domain error as a JSON response.
///
/// Domain error enums carry their own HTTP status and stable error code; this
/// keeps every handler's failure path to one line.
pub(crate) fn error_response(status: u16, code: &str, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": code,
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_falls_back_on_bad_status() {
        let response = error_response(9999, "INTERNAL_ERROR", "boom");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_keeps_status() {
        let response = error_response(409, "CONFLICT", "duplicate");
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
