//! Certificate routes: public application plus the administrator review,
//! issuance, and fast-path surface.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::error_response;
use crate::AppState;
use nagorik_core::certificate::CertificatePayload;
use nagorik_db::repositories::certificate::{
    ApplyCertificateInput, CertificateRepository, DirectIssueInput,
};
use nagorik_db::repositories::ledger::{LedgerRepository, LedgerSource};
use nagorik_shared::types::{CertificateTypeId, CitizenId};

/// Certificate application request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    /// Linked citizen; omit for manual/non-resident applicants.
    pub citizen_id: Option<CitizenId>,
    /// Applicant name, required when no citizen is linked.
    pub applicant_name: Option<String>,
    /// Certificate type.
    pub certificate_type_id: CertificateTypeId,
    /// Type-specific payload, tagged by `kind`.
    pub payload: CertificatePayload,
}

impl ApplyRequest {
    fn into_input(self) -> ApplyCertificateInput {
        ApplyCertificateInput {
            citizen_id: self.citizen_id.map(CitizenId::into_inner),
            applicant_name: self.applicant_name,
            certificate_type_id: self.certificate_type_id.into_inner(),
            payload: self.payload,
        }
    }
}

/// Direct issuance request payload (administrator fast path).
#[derive(Debug, Clone, Deserialize)]
pub struct DirectIssueRequest {
    /// The application fields.
    #[serde(flatten)]
    pub application: ApplyRequest,
    /// Fee collected; defaults to the type's fee.
    pub fee_paid: Option<Decimal>,
}

/// Creates the public certificate routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/certificates", post(apply))
}

/// Creates the administrator certificate routes.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/certificates/direct", post(direct_issue))
        .route("/admin/certificates/{id}", get(get_certificate))
        .route("/admin/certificates/{id}/ledger", get(ledger_entries))
        .route("/admin/certificates/{id}/approve", post(approve))
        .route("/admin/certificates/{id}/reject", post(reject))
        .route("/admin/certificates/{id}/issue", post(issue))
}

fn repo(state: &AppState) -> CertificateRepository {
    CertificateRepository::new((*state.db).clone(), state.codes.clone())
}

/// POST /certificates - File an application; it starts pending.
async fn apply(State(state): State<AppState>, Json(payload): Json<ApplyRequest>) -> impl IntoResponse {
    match repo(&state).apply(payload.into_input()).await {
        Ok(certificate) => (StatusCode::CREATED, Json(certificate)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// GET /admin/certificates/{id} - Fetch one application.
async fn get_certificate(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match repo(&state).find_by_id(id).await {
        Ok(certificate) => (StatusCode::OK, Json(certificate)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// GET /admin/certificates/{id}/ledger - Ledger entries for one certificate.
async fn ledger_entries(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let ledger = LedgerRepository::new((*state.db).clone());
    match ledger.find_by_source(LedgerSource::Certificate, id).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => error_response(500, "DATABASE_ERROR", &e.to_string()),
    }
}

/// POST /admin/certificates/{id}/approve - Approve a pending application.
async fn approve(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match repo(&state).approve(id).await {
        Ok(certificate) => (StatusCode::OK, Json(certificate)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// POST /admin/certificates/{id}/reject - Reject a pending application.
async fn reject(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match repo(&state).reject(id).await {
        Ok(certificate) => (StatusCode::OK, Json(certificate)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// POST /admin/certificates/{id}/issue - Issue an approved certificate.
async fn issue(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match repo(&state).issue(id).await {
        Ok(certificate) => (StatusCode::OK, Json(certificate)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// POST /admin/certificates/direct - Create a certificate already issued.
async fn direct_issue(
    State(state): State<AppState>,
    Json(payload): Json<DirectIssueRequest>,
) -> impl IntoResponse {
    let input = DirectIssueInput {
        application: payload.application.into_input(),
        fee_paid: payload.fee_paid,
    };

    match repo(&state).admin_issue_direct(input).await {
        Ok(certificate) => (StatusCode::CREATED, Json(certificate)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}
