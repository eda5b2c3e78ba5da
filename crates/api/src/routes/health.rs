//! `GET /health`: liveness plus a look at the record store.
//!
//! Mounted beside `/api`, so it stays reachable when bearer auth is on.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const SERVICE: &str = "clinic-records";

#[derive(Serialize)]
pub struct HealthReport {
    /// `ok`, or `degraded` when the record store cannot be reached.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Connections currently held by the pool, busy or idle.
    pub pool_size: u32,
    pub idle_connections: usize,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let reachable = match clinic_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Record store unreachable from health check");
            false
        }
    };

    Json(HealthReport {
        status: if reachable { "ok" } else { "degraded" },
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            pool_size: state.pool.size(),
            idle_connections: state.pool.num_idle(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
