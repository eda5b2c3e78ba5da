pub mod client;
pub mod enrollment;
pub mod health;
pub mod program;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /client                                  list (search, programId, sort, order), create
/// /client/{id}                             client with enrolled programs
///
/// /program                                 list with enrollment counts, create
/// /program/{id}                            program with enrollment count
///
/// /enrollment                              list (clientId, programId), enroll
///
/// /stats                                   aggregate counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/client", client::router())
        .nest("/program", program::router())
        .nest("/enrollment", enrollment::router())
        .nest("/stats", stats::router())
}
