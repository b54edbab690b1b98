//! Public certificate verification.
//!
//! Unauthenticated third-party lookup by certificate number. When the store
//! is unreachable the endpoint serves the snapshot mirror, clearly labeled,
//! instead of failing a read-only request.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tracing::warn;

use crate::routes::error_response;
use crate::AppState;
use nagorik_core::certificate::{CertificateError, number};
use nagorik_db::repositories::certificate::{CertificateRepository, VerifiedCertificate};

/// Verification response, labeled with where the answer came from.
#[derive(Serialize)]
struct VerifyResponse<'a> {
    /// `live` for a store read, `snapshot` for the degraded fallback.
    source: &'static str,
    #[serde(flatten)]
    result: &'a VerifiedCertificate,
}

/// Creates the public verification routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/verify/{number}", get(verify))
}

/// GET /verify/{number} - Third-party verification lookup.
async fn verify(State(state): State<AppState>, Path(number): Path<String>) -> impl IntoResponse {
    // A malformed number can never match; skip the store round trip
    if !number::is_well_formed(&number) {
        return error_response(404, "CERTIFICATE_NOT_FOUND", "No certificate with this number");
    }

    let repo = CertificateRepository::new((*state.db).clone(), state.codes.clone());

    match repo.verify_by_number(&number).await {
        Ok(result) => {
            state.verification_snapshot.store(&number, &result);
            (
                StatusCode::OK,
                Json(VerifyResponse {
                    source: "live",
                    result: &result,
                }),
            )
                .into_response()
        }
        Err(e @ CertificateError::Unavailable(_)) => {
            warn!(error = %e, "Store unreachable, trying verification snapshot");
            match state.verification_snapshot.get(&number) {
                Some(result) => (
                    StatusCode::OK,
                    Json(VerifyResponse {
                        source: "snapshot",
                        result: result.as_ref(),
                    }),
                )
                    .into_response(),
                None => error_response(e.status_code(), e.error_code(), &e.to_string()),
            }
        }
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}
