// Auth guard for protected routes
//
// The token travels in the `x-auth-token` header as a bare JWT. A
// well-formed token is not enough: the doctor it names must still
// exist in the store, otherwise the request is rejected before any
// business logic runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

use crate::auth::{error::AuthError, repository::DoctorRepository};
use crate::AppState;

/// Request header carrying the doctor's token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Resolved doctor identity, available to any handler that asks for it
#[derive(Debug, Clone)]
pub struct AuthenticatedDoctor {
    pub doctor_id: Uuid,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedDoctor
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        let claims = state.token_service.validate_token(token)?;

        // The identity inside the token must still resolve in the
        // store; a deleted doctor keeps a valid signature forever
        let doctor = DoctorRepository::new(state.db.clone())
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UnknownDoctor)?;

        Ok(AuthenticatedDoctor {
            doctor_id: doctor.id,
            email: doctor.email,
        })
    }
}
