use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error types for patient operations
#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Patient not found")]
    NotFound,

    #[error("Invalid patient id: {0}")]
    InvalidId(String),

    #[error("Invalid doctor id: {0}")]
    InvalidDoctorId(String),

    #[error("Patients can only be listed by their own doctor")]
    Forbidden,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<sqlx::Error> for PatientError {
    fn from(err: sqlx::Error) -> Self {
        PatientError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for PatientError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PatientError::DatabaseError(msg) => {
                tracing::error!("Database error in patients: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            PatientError::NotFound => (StatusCode::NOT_FOUND, "Patient not found".to_string()),
            PatientError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("'{}' is not a valid patient id", id),
            ),
            PatientError::InvalidDoctorId(id) => (
                StatusCode::BAD_REQUEST,
                format!("'{}' is not a valid doctor id", id),
            ),
            PatientError::Forbidden => {
                tracing::warn!("Doctor requested another doctor's patient list");
                (
                    StatusCode::FORBIDDEN,
                    "Patients can only be listed by their own doctor".to_string(),
                )
            }
            PatientError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
