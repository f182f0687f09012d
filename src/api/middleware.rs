//! Bearer-token authentication middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Reject requests without a `Bearer` token (401) or with one that
/// fails verification (400, as the original middleware answered).
/// Verified claims are stored in request extensions for handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify(token)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
