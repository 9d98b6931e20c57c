use sqlx::PgPool;
use uuid::Uuid;

use crate::patients::error::PatientError;
use crate::patients::models::{DoctorSummary, MedicalHistoryEntry, Patient};

/// Fields of one history entry as written to the store
pub struct NewHistoryEntry {
    pub disease: String,
    pub medications: String,
    pub description: String,
    pub date: chrono::NaiveDate,
}

/// Repository for patient records and their medical history
#[derive(Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a patient together with its seed history entry.
    /// Both rows land in one transaction so a patient never exists
    /// with a half-written history.
    pub async fn create(
        &self,
        doctor_id: Uuid,
        patient_name: &str,
        age: i32,
        entry: NewHistoryEntry,
    ) -> Result<Patient, PatientError> {
        let mut tx = self.pool.begin().await?;

        let patient = sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (patient_name, age, doctor_id)
            VALUES ($1, $2, $3)
            RETURNING id, patient_name, age, doctor_id, created_at, updated_at
            "#,
        )
        .bind(patient_name)
        .bind(age)
        .bind(doctor_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO medical_history (patient_id, disease, medications, description, date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(patient.id)
        .bind(&entry.disease)
        .bind(&entry.medications)
        .bind(&entry.description)
        .bind(entry.date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(patient)
    }

    /// Find a patient by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Patient>, PatientError> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, patient_name, age, doctor_id, created_at, updated_at
            FROM patients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(patient)
    }

    /// All patients owned by a doctor, oldest first
    pub async fn find_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<Patient>, PatientError> {
        let patients = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, patient_name, age, doctor_id, created_at, updated_at
            FROM patients
            WHERE doctor_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(patients)
    }

    /// Append one entry to a patient's history. A single INSERT keyed
    /// by patient id: concurrent appends serialize in the store and
    /// neither is lost.
    pub async fn append_entry(
        &self,
        patient_id: Uuid,
        entry: NewHistoryEntry,
    ) -> Result<MedicalHistoryEntry, PatientError> {
        let entry = sqlx::query_as::<_, MedicalHistoryEntry>(
            r#"
            INSERT INTO medical_history (patient_id, disease, medications, description, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, patient_id, disease, medications, description, date, created_at
            "#,
        )
        .bind(patient_id)
        .bind(&entry.disease)
        .bind(&entry.medications)
        .bind(&entry.description)
        .bind(entry.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Full history of a patient in append order
    pub async fn history_for(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<MedicalHistoryEntry>, PatientError> {
        let entries = sqlx::query_as::<_, MedicalHistoryEntry>(
            r#"
            SELECT id, patient_id, disease, medications, description, date, created_at
            FROM medical_history
            WHERE patient_id = $1
            ORDER BY id
            "#,
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Public fields of a doctor, for embedding in patient responses
    pub async fn find_doctor_summary(
        &self,
        doctor_id: Uuid,
    ) -> Result<Option<DoctorSummary>, PatientError> {
        let doctor = sqlx::query_as::<_, DoctorSummary>(
            r#"
            SELECT id, doctor_name, email, qualification
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(doctor_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doctor)
    }
}
