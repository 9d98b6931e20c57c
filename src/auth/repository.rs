// Database repository for doctor records

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{error::AuthError, models::Doctor};

/// Repository for doctor records
#[derive(Clone)]
pub struct DoctorRepository {
    pool: PgPool,
}

impl DoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new doctor. Duplicate email/name detection relies on
    /// the unique indexes, so two concurrent registrations cannot both
    /// slip past an existence check.
    pub async fn create(
        &self,
        doctor_name: &str,
        email: &str,
        password_hash: &str,
        qualification: &str,
    ) -> Result<Doctor, AuthError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            INSERT INTO doctors (doctor_name, email, password_hash, qualification)
            VALUES ($1, $2, $3, $4)
            RETURNING id, doctor_name, email, password_hash, qualification, created_at, updated_at
            "#,
        )
        .bind(doctor_name)
        .bind(email)
        .bind(password_hash)
        .bind(qualification)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return match db_err.constraint() {
                        Some("doctors_doctor_name_key") => AuthError::DoctorNameAlreadyExists,
                        _ => AuthError::EmailAlreadyExists,
                    };
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(doctor)
    }

    /// Find a doctor by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, AuthError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, doctor_name, email, password_hash, qualification, created_at, updated_at
            FROM doctors
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(doctor)
    }

    /// Find a doctor by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Doctor>, AuthError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, doctor_name, email, password_hash, qualification, created_at, updated_at
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(doctor)
    }
}
