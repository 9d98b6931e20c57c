// HTTP handlers for doctor registration and login

use axum::{extract::State, Json};

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
};
use crate::AppState;

/// Register a new doctor
/// POST /api/v1/doctor/register
#[utoipa::path(
    post,
    path = "/api/v1/doctor/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Doctor registered successfully", body = RegisterResponse),
        (status = 400, description = "Validation failure or duplicate email/name"),
        (status = 500, description = "Store failure")
    ),
    tag = "doctor"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AuthError> {
    let (token, doctor) = state.auth_service.register(request).await?;

    Ok(Json(RegisterResponse {
        success: true,
        message: "Doctor registered successfully".to_string(),
        token,
        doctor: doctor.into(),
    }))
}

/// Log a doctor in
/// POST /api/v1/doctor/login
#[utoipa::path(
    post,
    path = "/api/v1/doctor/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in successfully", body = LoginResponse),
        (status = 400, description = "Invalid credentials or validation failure"),
        (status = 500, description = "Store failure")
    ),
    tag = "doctor"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let (token, doctor) = state.auth_service.login(request).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Logged in successfully".to_string(),
        token,
        email: doctor.email,
        id: doctor.id,
    }))
}
