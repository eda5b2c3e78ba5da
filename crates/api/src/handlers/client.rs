//! Handlers for the `/client` resource.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use clinic_core::client::{validate_client, ClientDraft, ClientListQuery};
use clinic_core::types::parse_id;
use clinic_db::models::client::{Client, ClientWithPrograms};
use clinic_db::repositories::{ClientRepo, EnrollmentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::query::ClientListParams;
use crate::state::AppState;

/// GET /api/client
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ClientListParams>,
) -> AppResult<Json<Vec<Client>>> {
    let Some(query) = ClientListQuery::parse(
        params.search.as_deref(),
        params.program_id.as_deref(),
        params.sort.as_deref(),
        params.order.as_deref(),
    )?
    else {
        return Ok(Json(Vec::new()));
    };

    let clients = ClientRepo::list(&state.pool, &query).await?;
    Ok(Json(clients))
}

/// POST /api/client
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ClientDraft>,
) -> AppResult<Json<Client>> {
    let input = validate_client(&draft, Utc::now().date_naive())?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = %client.id, "Client registered");
    Ok(Json(client))
}

/// GET /api/client/{id}
///
/// The client profile with a `programs` array of everything they are
/// enrolled in.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ClientWithPrograms>> {
    let id = parse_id(&id).ok_or_else(|| AppError::not_found("Client"))?;
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client"))?;

    let programs = EnrollmentRepo::list_programs_for_client(&state.pool, id).await?;

    Ok(Json(ClientWithPrograms { client, programs }))
}
