use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::auth::auth_service::Claims;
use crate::domain::auth::dto::{AuthResponse, CredentialsRequest};
use crate::errors::AppError;

pub struct AuthController;

impl AuthController {
    pub async fn signup(
        State(state): State<AppState>,
        Json(payload): Json<CredentialsRequest>,
    ) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
        let response = state.auth_service.signup(payload)?;
        Ok((StatusCode::CREATED, Json(response)))
    }

    pub async fn login(
        State(state): State<AppState>,
        Json(payload): Json<CredentialsRequest>,
    ) -> Result<Json<AuthResponse>, AppError> {
        Ok(Json(state.auth_service.login(payload)?))
    }

    /// Echo of the verified claims, for token introspection.
    pub async fn me(Extension(claims): Extension<Claims>) -> Json<Claims> {
        Json(claims)
    }
}
