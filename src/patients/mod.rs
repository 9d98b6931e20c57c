// Patients module
// Patient records owned by doctors, with an append-only medical history

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::PatientError;
pub use models::{
    AddRecordRequest, CreatePatientRequest, DoctorSummary, HistoryEntryResponse,
    MedicalHistoryEntry, Patient, PatientListResponse, PatientRecord, PatientResponse,
};
pub use repository::PatientRepository;
pub use service::PatientService;
