//! Route definitions for the `/enrollment` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enrollment`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(enrollment::list).post(enrollment::create))
}
