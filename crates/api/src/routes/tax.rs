//! Holding-tax routes: payment and household-aware compliance checks.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::error_response;
use crate::AppState;
use nagorik_core::tax::fiscal_year_for;
use nagorik_db::TaxRepository;
use nagorik_shared::types::CitizenId;

/// Query parameters for a compliance check.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceQuery {
    /// Fiscal year label; defaults to the current fiscal year.
    pub fiscal_year: Option<String>,
}

/// Tax payment request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PayTaxRequest {
    /// The paying citizen.
    pub citizen_id: CitizenId,
    /// Fiscal year label; defaults to the current fiscal year.
    pub fiscal_year: Option<String>,
    /// Payment amount.
    pub amount: Decimal,
}

/// Minimal payer identity in compliance responses.
#[derive(Debug, Clone, Serialize)]
pub struct PayerInfo {
    /// Citizen ID.
    pub id: Uuid,
    /// Name (English).
    pub name_en: String,
    /// National ID.
    pub nid: String,
}

/// Compliance check response.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceResponse {
    /// The fiscal year that was checked.
    pub fiscal_year: String,
    /// Whether the year is covered.
    pub paid: bool,
    /// Who covered it, when paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<PayerInfo>,
}

/// Creates the administrator tax routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/citizens/{id}/tax-compliance", get(check_compliance))
        .route("/admin/tax-payments", post(pay_tax))
}

fn current_fiscal_year(state: &AppState) -> String {
    fiscal_year_for(Utc::now().date_naive(), state.registry.fiscal_start_month)
}

/// GET /admin/citizens/{id}/tax-compliance - Household-aware compliance check.
async fn check_compliance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ComplianceQuery>,
) -> impl IntoResponse {
    let fiscal_year = query
        .fiscal_year
        .unwrap_or_else(|| current_fiscal_year(&state));

    let repo = TaxRepository::new((*state.db).clone());
    match repo.check_compliance(id, &fiscal_year).await {
        Ok(compliance) => (
            StatusCode::OK,
            Json(ComplianceResponse {
                fiscal_year,
                paid: compliance.paid,
                payer: compliance.payer.map(|payer| PayerInfo {
                    id: payer.id,
                    name_en: payer.name_en,
                    nid: payer.nid,
                }),
            }),
        )
            .into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// POST /admin/tax-payments - Record a holding-tax payment.
async fn pay_tax(
    State(state): State<AppState>,
    Json(payload): Json<PayTaxRequest>,
) -> impl IntoResponse {
    let fiscal_year = payload
        .fiscal_year
        .unwrap_or_else(|| current_fiscal_year(&state));

    let repo = TaxRepository::new((*state.db).clone());
    match repo
        .pay_tax(payload.citizen_id.into_inner(), &fiscal_year, payload.amount)
        .await
    {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}
