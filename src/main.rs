mod auth;
mod config;
mod db;
mod patients;
mod validation;

use axum::{
    http::{StatusCode, Uri},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{AuthService, DoctorRepository, TokenService};
use config::Config;
use patients::{PatientRepository, PatientService};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        patients::handlers::add_patient_handler,
        patients::handlers::all_patients_handler,
        patients::handlers::patient_by_id_handler,
        patients::handlers::add_record_handler,
    ),
    components(
        schemas(
            auth::models::RegisterRequest,
            auth::models::LoginRequest,
            auth::models::RegisterResponse,
            auth::models::LoginResponse,
            auth::models::DoctorResponse,
            patients::models::CreatePatientRequest,
            patients::models::AddRecordRequest,
            patients::models::PatientResponse,
            patients::models::PatientListResponse,
            patients::models::PatientRecord,
            patients::models::HistoryEntryResponse,
            patients::models::DoctorSummary,
        )
    ),
    tags(
        (name = "doctor", description = "Doctor registration and login"),
        (name = "patients", description = "Patient records and medical history")
    ),
    info(
        title = "Clinic API",
        version = "1.0.0",
        description = "RESTful API for doctors managing patient records"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub token_service: TokenService,
    pub auth_service: AuthService,
    pub patient_service: PatientService,
}

impl AppState {
    /// Wire the repositories and services around one pool
    pub fn new(db: PgPool, jwt_secret: String) -> Self {
        let token_service = TokenService::new(jwt_secret);
        let auth_service = AuthService::new(
            DoctorRepository::new(db.clone()),
            token_service.clone(),
        );
        let patient_service = PatientService::new(PatientRepository::new(db.clone()));

        Self {
            db,
            token_service,
            auth_service,
            patient_service,
        }
    }
}

/// Fallback for unmatched routes
async fn route_not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
            "route": uri.path(),
        })),
    )
}

/// Creates and configures the application router
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route("/api/v1/doctor/register", post(auth::handlers::register_handler))
        .route("/api/v1/doctor/login", post(auth::handlers::login_handler))
        .route("/api/v1/doctor/add-patient", post(patients::handlers::add_patient_handler))
        .route("/api/v1/doctor/all-patients/:doctor_id", get(patients::handlers::all_patients_handler))
        .route("/api/v1/doctor/patient/:id", get(patients::handlers::patient_by_id_handler))
        .route("/api/v1/doctor/add-record/:id", post(patients::handlers::add_record_handler))
        .fallback(route_not_found)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Clinic API - Starting...");

    let config = Config::from_env().expect("Invalid configuration");

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let state = AppState::new(db_pool, config.jwt_secret.clone());
    let app = create_router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Clinic API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests;
