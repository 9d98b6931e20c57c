// Authentication module
// Doctor registration, login, and the token guard for protected routes

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use middleware::AuthenticatedDoctor;
pub use models::{Doctor, DoctorResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use repository::DoctorRepository;
pub use service::AuthService;
pub use token::TokenService;
