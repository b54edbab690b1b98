//! Certificate type catalog routes.
//!
//! The catalog is readable by anyone (the application form needs it); adding
//! types and changing fees is administrator work. There is no delete route
//! by design.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::error_response;
use crate::AppState;
use nagorik_core::certificate::CertificateKind;
use nagorik_db::repositories::certificate_type::{
    CertificateTypeRepository, CreateCertificateTypeInput,
};

/// Request payload for adding a certificate type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTypeRequest {
    /// Canonical kind: trade_license, succession, or general.
    pub kind: String,
    /// Display name (English).
    pub name_en: String,
    /// Display name (Bangla).
    pub name_bn: String,
    /// Issuance fee.
    pub fee: Decimal,
    /// Optional narrative template.
    pub template: Option<String>,
}

/// Request payload for a fee change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFeeRequest {
    /// The new fee.
    pub fee: Decimal,
}

/// Creates the public catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/certificate-types", get(list))
}

/// Creates the administrator catalog routes.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/certificate-types", post(create))
        .route("/admin/certificate-types/{id}/fee", patch(update_fee))
}

/// GET /certificate-types - List the catalog.
async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CertificateTypeRepository::new((*state.db).clone());
    match repo.list().await {
        Ok(types) => (StatusCode::OK, Json(types)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// POST /admin/certificate-types - Add a type to the catalog.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateTypeRequest>,
) -> impl IntoResponse {
    let Some(kind) = CertificateKind::parse(&payload.kind) else {
        return error_response(
            400,
            "VALIDATION_ERROR",
            "kind must be trade_license, succession, or general",
        );
    };

    let repo = CertificateTypeRepository::new((*state.db).clone());
    let input = CreateCertificateTypeInput {
        kind,
        name_en: payload.name_en,
        name_bn: payload.name_bn,
        fee: payload.fee,
        template: payload.template,
    };

    match repo.create(input).await {
        Ok(cert_type) => (StatusCode::CREATED, Json(cert_type)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// PATCH /admin/certificate-types/{id}/fee - Change a type's fee.
async fn update_fee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFeeRequest>,
) -> impl IntoResponse {
    let repo = CertificateTypeRepository::new((*state.db).clone());
    match repo.update_fee(id, payload.fee).await {
        Ok(cert_type) => (StatusCode::OK, Json(cert_type)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}
