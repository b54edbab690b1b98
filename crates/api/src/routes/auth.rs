//! Administrator authentication: login, passcode verification, email binding.
//!
//! Login is a two-step machine when the account has a bound email: valid
//! credentials issue a passcode and the session is granted only after
//! `/auth/verify-otp`. Accounts without a bound email get their session
//! immediately.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;
use tracing::{error, info};

use crate::middleware::auth::AuthAdmin;
use crate::routes::error_response;
use crate::AppState;
use nagorik_core::auth::verify_password;
use nagorik_core::otp::OtpPurpose;
use nagorik_db::{AdministratorRepository, OtpRepository};
use nagorik_shared::auth::{BindEmailRequest, LoginRequest, LoginResponse, SessionResponse, VerifyOtpRequest};

/// Creates the public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/verify-otp", post(verify_otp))
}

/// Creates the auth routes that require an authenticated session.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/bind-email", post(bind_email))
}

/// POST /auth/login - Authenticate an administrator.
#[allow(clippy::too_many_lines)]
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let admin_repo = AdministratorRepository::new((*state.db).clone());

    let admin = match admin_repo.find_by_username(&payload.username).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            info!(username = %payload.username, "Login attempt for unknown administrator");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid username or password"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return error_response(e.status_code(), e.error_code(), "An error occurred during login");
        }
    };

    if !admin.is_active {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "account_disabled",
                "message": "This account has been disabled"
            })),
        )
            .into_response();
    }

    match verify_password(&payload.password, &admin.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(admin_id = %admin.id, "Failed login attempt - invalid password");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid username or password"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during login"
                })),
            )
                .into_response();
        }
    }

    // A bound email activates the second factor
    if let Some(email) = admin.email.clone() {
        let otp_repo = OtpRepository::new((*state.db).clone());
        let code = match otp_repo
            .issue(
                &email,
                OtpPurpose::Login,
                admin.id,
                state.registry.otp_ttl_minutes,
            )
            .await
        {
            Ok(code) => code,
            Err(e) => {
                error!(error = %e, "Failed to issue passcode");
                return error_response(e.status_code(), e.error_code(), &e.to_string());
            }
        };

        // A transport failure aborts the login attempt entirely
        if let Err(e) = state
            .email_service
            .send_otp_email(&email, &code, state.registry.otp_ttl_minutes)
            .await
        {
            error!(error = %e, "Failed to send passcode email");
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "email_send_failed",
                    "message": "Could not deliver the sign-in code"
                })),
            )
                .into_response();
        }

        info!(admin_id = %admin.id, "Passcode sent, awaiting verification");
        return (
            StatusCode::OK,
            Json(LoginResponse {
                otp_required: true,
                token: None,
                expires_in: None,
            }),
        )
            .into_response();
    }

    match state.jwt_service.issue_session(admin.id, &admin.username) {
        Ok(token) => {
            info!(admin_id = %admin.id, "Administrator logged in");
            (
                StatusCode::OK,
                Json(LoginResponse {
                    otp_required: false,
                    token: Some(token),
                    expires_in: Some(state.jwt_service.session_expires_in()),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to generate session token");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during login"
                })),
            )
                .into_response()
        }
    }
}

/// POST /auth/verify-otp - Verify a passcode and fulfill its purpose.
async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> impl IntoResponse {
    let otp_repo = OtpRepository::new((*state.db).clone());

    let (purpose, admin_id) = match otp_repo.verify(&payload.email, &payload.code).await {
        Ok(outcome) => outcome,
        Err(e) => return error_response(e.status_code(), e.error_code(), &e.to_string()),
    };

    let admin_repo = AdministratorRepository::new((*state.db).clone());

    match purpose {
        OtpPurpose::Login => {
            let admin = match admin_repo.find_by_id(admin_id).await {
                Ok(Some(a)) => a,
                Ok(None) => {
                    return error_response(401, "UNAUTHORIZED", "Administrator no longer exists");
                }
                Err(e) => {
                    error!(error = %e, "Database error during passcode verification");
                    return error_response(e.status_code(), e.error_code(), "An error occurred");
                }
            };

            match state.jwt_service.issue_session(admin.id, &admin.username) {
                Ok(token) => {
                    info!(admin_id = %admin.id, "Second factor verified, session granted");
                    (
                        StatusCode::OK,
                        Json(SessionResponse {
                            token,
                            expires_in: state.jwt_service.session_expires_in(),
                        }),
                    )
                        .into_response()
                }
                Err(e) => {
                    error!(error = %e, "Failed to generate session token");
                    error_response(500, "INTERNAL_ERROR", "An error occurred")
                }
            }
        }
        OtpPurpose::EmailBinding => match admin_repo.bind_email(admin_id, &payload.email).await {
            Ok(admin) => {
                info!(admin_id = %admin.id, "Email bound to administrator account");
                (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Email bound; future logins require a sign-in code",
                        "email": admin.email
                    })),
                )
                    .into_response()
            }
            Err(e) => {
                error!(error = %e, "Failed to bind email");
                error_response(e.status_code(), e.error_code(), &e.to_string())
            }
        },
    }
}

/// POST /auth/bind-email - Start binding an email to the signed-in account.
///
/// Sends a passcode to the address; the binding completes through
/// `/auth/verify-otp`.
async fn bind_email(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(payload): Json<BindEmailRequest>,
) -> impl IntoResponse {
    let email = payload.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return error_response(400, "VALIDATION_ERROR", "A valid email address is required");
    }

    let admin_repo = AdministratorRepository::new((*state.db).clone());
    match admin_repo.find_by_email(&email).await {
        Ok(Some(other)) if other.id != admin.admin_id() => {
            return error_response(409, "CONFLICT", "Email is already bound to another account");
        }
        Ok(_) => {}
        Err(e) => {
            error!(error = %e, "Database error checking email binding");
            return error_response(e.status_code(), e.error_code(), "An error occurred");
        }
    }

    let otp_repo = OtpRepository::new((*state.db).clone());
    let code = match otp_repo
        .issue(
            &email,
            OtpPurpose::EmailBinding,
            admin.admin_id(),
            state.registry.otp_ttl_minutes,
        )
        .await
    {
        Ok(code) => code,
        Err(e) => return error_response(e.status_code(), e.error_code(), &e.to_string()),
    };

    if let Err(e) = state
        .email_service
        .send_otp_email(&email, &code, state.registry.otp_ttl_minutes)
        .await
    {
        error!(error = %e, "Failed to send binding passcode email");
        return error_response(502, "EMAIL_SEND_FAILED", "Could not deliver the code");
    }

    (
        StatusCode::ACCEPTED,
        Json(json!({
            "message": "Verification code sent; confirm it to bind the email"
        })),
    )
        .into_response()
}
