// Patient data models and DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_not_blank;

/// Patient database model
#[derive(Debug, Clone, FromRow)]
pub struct Patient {
    pub id: Uuid,
    pub patient_name: String,
    pub age: i32,
    pub doctor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One appended clinical note. Rows are append-only; ascending `id`
/// is the chronological order of the history.
#[derive(Debug, Clone, FromRow)]
pub struct MedicalHistoryEntry {
    pub id: i64,
    pub patient_id: Uuid,
    pub disease: String,
    pub medications: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Public fields of the owning doctor, embedded in patient responses
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DoctorSummary {
    pub id: Uuid,
    pub doctor_name: String,
    pub email: String,
    pub qualification: String,
}

/// Request DTO for creating a patient with its first history entry
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePatientRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "Jane Doe")]
    pub patient_name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    #[schema(example = 34)]
    pub age: i32,
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "Hypertension")]
    pub disease: String,
    #[validate(length(max = 1000, message = "Medications must not exceed 1000 characters"))]
    #[schema(example = "Amlodipine 5mg")]
    pub medications: String,
    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    #[schema(example = "Stage 1, follow-up in two weeks")]
    pub description: String,
    pub date: NaiveDate,
}

/// Request DTO for appending one history entry to a patient
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddRecordRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "Seasonal flu")]
    pub disease: String,
    #[validate(length(max = 1000, message = "Medications must not exceed 1000 characters"))]
    #[schema(example = "Oseltamivir 75mg")]
    pub medications: String,
    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    #[schema(example = "Fever resolved after three days")]
    pub description: String,
    pub date: NaiveDate,
}

/// One history entry as returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryEntryResponse {
    pub disease: String,
    pub medications: String,
    pub description: String,
    pub date: NaiveDate,
}

impl From<MedicalHistoryEntry> for HistoryEntryResponse {
    fn from(entry: MedicalHistoryEntry) -> Self {
        Self {
            disease: entry.disease,
            medications: entry.medications,
            description: entry.description,
            date: entry.date,
        }
    }
}

/// A patient resolved with its owning doctor and full history
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PatientRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub age: i32,
    pub medical_history: Vec<HistoryEntryResponse>,
    pub doctor: DoctorSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response envelope for endpoints returning a single patient
#[derive(Debug, Serialize, ToSchema)]
pub struct PatientResponse {
    pub success: bool,
    pub message: String,
    pub patient: PatientRecord,
}

/// Response envelope for the patient list endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct PatientListResponse {
    pub success: bool,
    pub message: String,
    pub patients: Vec<PatientRecord>,
}
