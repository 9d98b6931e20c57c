// HTTP handlers for patient endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::middleware::AuthenticatedDoctor;
use crate::patients::{
    error::PatientError,
    models::{
        AddRecordRequest, CreatePatientRequest, PatientListResponse, PatientResponse,
    },
    service::parse_doctor_id,
};
use crate::AppState;

/// Create a patient under the authenticated doctor
/// POST /api/v1/doctor/add-patient
#[utoipa::path(
    post,
    path = "/api/v1/doctor/add-patient",
    request_body = CreatePatientRequest,
    responses(
        (status = 200, description = "Patient created", body = PatientResponse),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store failure")
    ),
    tag = "patients"
)]
pub async fn add_patient_handler(
    State(state): State<AppState>,
    doctor: AuthenticatedDoctor,
    Json(request): Json<CreatePatientRequest>,
) -> Result<Json<PatientResponse>, PatientError> {
    // Ownership comes from the token, never from the request body
    let patient = state
        .patient_service
        .create_patient(doctor.doctor_id, request)
        .await?;

    Ok(Json(PatientResponse {
        success: true,
        message: "Patient added successfully".to_string(),
        patient,
    }))
}

/// List the authenticated doctor's patients
/// GET /api/v1/doctor/all-patients/:doctor_id
#[utoipa::path(
    get,
    path = "/api/v1/doctor/all-patients/{doctor_id}",
    params(("doctor_id" = String, Path, description = "Doctor id, must match the token")),
    responses(
        (status = 200, description = "Patients of the doctor (possibly empty)", body = PatientListResponse),
        (status = 400, description = "Malformed doctor id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Doctor id does not match the token"),
        (status = 500, description = "Store failure")
    ),
    tag = "patients"
)]
pub async fn all_patients_handler(
    State(state): State<AppState>,
    doctor: AuthenticatedDoctor,
    Path(doctor_id): Path<String>,
) -> Result<Json<PatientListResponse>, PatientError> {
    let doctor_id = parse_doctor_id(&doctor_id)?;

    // The list is scoped to the caller; asking for another doctor's
    // roster is rejected rather than silently redirected
    if doctor_id != doctor.doctor_id {
        return Err(PatientError::Forbidden);
    }

    let patients = state.patient_service.list_for_doctor(doctor_id).await?;

    let message = if patients.is_empty() {
        "No patients found for this doctor".to_string()
    } else {
        format!("Found {} patient(s)", patients.len())
    };

    Ok(Json(PatientListResponse {
        success: true,
        message,
        patients,
    }))
}

/// Fetch one patient by id
/// GET /api/v1/doctor/patient/:id
#[utoipa::path(
    get,
    path = "/api/v1/doctor/patient/{id}",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient with doctor and history", body = PatientResponse),
        (status = 400, description = "Malformed patient id"),
        (status = 404, description = "No patient with this id"),
        (status = 500, description = "Store failure")
    ),
    tag = "patients"
)]
pub async fn patient_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, PatientError> {
    let patient = state.patient_service.find_patient(&id).await?;

    Ok(Json(PatientResponse {
        success: true,
        message: "Patient fetched successfully".to_string(),
        patient,
    }))
}

/// Append a medical-history entry to a patient
/// POST /api/v1/doctor/add-record/:id
#[utoipa::path(
    post,
    path = "/api/v1/doctor/add-record/{id}",
    params(("id" = String, Path, description = "Patient id")),
    request_body = AddRecordRequest,
    responses(
        (status = 200, description = "Updated patient", body = PatientResponse),
        (status = 400, description = "Malformed patient id or validation failure"),
        (status = 404, description = "No patient with this id"),
        (status = 500, description = "Store failure")
    ),
    tag = "patients"
)]
pub async fn add_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddRecordRequest>,
) -> Result<Json<PatientResponse>, PatientError> {
    let patient = state.patient_service.add_record(&id, request).await?;

    Ok(Json(PatientResponse {
        success: true,
        message: "Medical record added successfully".to_string(),
        patient,
    }))
}
