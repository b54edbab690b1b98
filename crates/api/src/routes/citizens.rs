//! Citizen routes: public self-application and identification, plus the
//! administrator review surface.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::error_response;
use crate::AppState;
use nagorik_core::citizen::{Address, CitizenStatus, Gender, PersonName};
use nagorik_db::repositories::citizen::{CitizenRepository, CreateCitizenInput};

/// Citizen registration request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCitizenRequest {
    /// National ID.
    pub nid: String,
    /// Name (English).
    pub name_en: String,
    /// Name (Bangla).
    pub name_bn: String,
    /// Father's name (English).
    pub father_name_en: String,
    /// Father's name (Bangla).
    pub father_name_bn: String,
    /// Mother's name (English).
    pub mother_name_en: String,
    /// Mother's name (Bangla).
    pub mother_name_bn: String,
    /// Phone number.
    pub phone: String,
    /// Date of birth (YYYY-MM-DD).
    pub date_of_birth: NaiveDate,
    /// Gender: male, female, or other.
    pub gender: String,
    /// Optional household code shared by one taxable property.
    pub household_code: Option<String>,
    /// Village or street.
    pub village: String,
    /// Post office.
    pub post_office: String,
    /// Postal code.
    pub postal_code: String,
    /// District.
    pub district: String,
}

impl RegisterCitizenRequest {
    fn into_input(self) -> Result<CreateCitizenInput, axum::response::Response> {
        let Some(gender) = Gender::parse(&self.gender) else {
            return Err(error_response(
                400,
                "VALIDATION_ERROR",
                "gender must be male, female, or other",
            ));
        };

        Ok(CreateCitizenInput {
            nid: self.nid,
            name: PersonName {
                en: self.name_en,
                bn: self.name_bn,
            },
            father_name: PersonName {
                en: self.father_name_en,
                bn: self.father_name_bn,
            },
            mother_name: PersonName {
                en: self.mother_name_en,
                bn: self.mother_name_bn,
            },
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender,
            household_code: self.household_code,
            address: Address {
                village: self.village,
                post_office: self.post_office,
                postal_code: self.postal_code,
                district: self.district,
            },
        })
    }
}

/// Identification request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentifyRequest {
    /// National ID.
    pub nid: String,
    /// Date of birth (YYYY-MM-DD).
    pub date_of_birth: NaiveDate,
}

/// Status change request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SetStatusRequest {
    /// Target status: approved or rejected.
    pub status: String,
}

/// Creates the public citizen routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/citizens", post(register))
        .route("/citizens/identify", post(identify))
}

/// Creates the administrator citizen routes.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/citizens", post(admin_register))
        .route("/admin/citizens/{id}/status", patch(set_status))
}

/// POST /citizens - Public self-application; the record starts pending.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCitizenRequest>,
) -> impl IntoResponse {
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(response) => return response,
    };

    let repo = CitizenRepository::new((*state.db).clone());
    match repo.register(input).await {
        Ok(citizen) => (StatusCode::CREATED, Json(citizen)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// POST /admin/citizens - Administrator entry; the record is approved at once.
async fn admin_register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCitizenRequest>,
) -> impl IntoResponse {
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(response) => return response,
    };

    let repo = CitizenRepository::new((*state.db).clone());
    match repo.admin_register(input).await {
        Ok(citizen) => (StatusCode::CREATED, Json(citizen)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// POST /citizens/identify - Look up an approved citizen by NID and birth date.
async fn identify(
    State(state): State<AppState>,
    Json(payload): Json<IdentifyRequest>,
) -> impl IntoResponse {
    let repo = CitizenRepository::new((*state.db).clone());
    match repo.identify(&payload.nid, payload.date_of_birth).await {
        Ok(citizen) => (StatusCode::OK, Json(citizen)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}

/// PATCH /admin/citizens/{id}/status - Approve or reject a pending record.
async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStatusRequest>,
) -> impl IntoResponse {
    let Some(target) = CitizenStatus::parse(&payload.status) else {
        return error_response(
            400,
            "VALIDATION_ERROR",
            "status must be approved or rejected",
        );
    };

    let repo = CitizenRepository::new((*state.db).clone());
    match repo.set_status(id, target).await {
        Ok(citizen) => (StatusCode::OK, Json(citizen)).into_response(),
        Err(e) => error_response(e.status_code(), e.error_code(), &e.to_string()),
    }
}
