// Doctor data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_not_blank;

/// Doctor database model
#[derive(Debug, Clone, FromRow)]
pub struct Doctor {
    pub id: Uuid,
    pub doctor_name: String,
    pub email: String,
    pub password_hash: String,
    pub qualification: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Doctor response model (excludes password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorResponse {
    pub id: Uuid,
    pub doctor_name: String,
    pub email: String,
    pub qualification: String,
    pub created_at: DateTime<Utc>,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            doctor_name: doctor.doctor_name,
            email: doctor.email,
            qualification: doctor.qualification,
            created_at: doctor.created_at,
        }
    }
}

/// Registration request DTO
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "Dr. Amina Benali")]
    pub doctor_name: String,
    #[validate(email(message = "Email is invalid"))]
    #[schema(example = "amina.benali@clinic.example")]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "MBBS")]
    pub qualification: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Email is invalid"))]
    #[schema(example = "amina.benali@clinic.example")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response for a successful registration
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub doctor: DoctorResponse,
}

/// Response for a successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub email: String,
    pub id: Uuid,
}
