//! Bearer-token guard for the `/api` routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use clinic_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Reject the request unless it carries `Authorization: Bearer <token>` with a
/// token that validates against the configured secret.
///
/// Installed only when a secret is configured; with no secret the request
/// passes straight through.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(jwt) = state.config.jwt.as_ref() else {
        return Ok(next.run(request).await);
    };

    let token = bearer_token(request.headers())?;

    let claims = validate_token(token, jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    tracing::debug!(subject = %claims.sub, "Authenticated API request");
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Authorization header required".into(),
            ))
        })?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })
}
