use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use common::{VillaCreateDto, VillaDto, VillaUpdateDto};
use service::patch::JsonPatch;
use tracing::info;

use crate::{errors::JsonApiError, routes::VILLA_BASE_PATH, state::ServerState};

fn villa_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    let Path(id) = path?;
    Ok(id)
}

/// Unwrap a JSON body, treating a `null` body like a missing one.
fn require_body<T>(body: Result<Json<Option<T>>, JsonRejection>) -> Result<T, JsonApiError> {
    match body? {
        Json(Some(v)) => Ok(v),
        Json(None) => Err(JsonApiError::bad_request("request body is required")),
    }
}

#[utoipa::path(
    get, path = "/api/villaAPI", tag = "villa",
    responses((status = 200, description = "All villas", body = [crate::openapi::VillaDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<VillaDto>>, JsonApiError> {
    let villas = state.villas.list().await?;
    info!(count = villas.len(), "list villas");
    Ok(Json(villas))
}

#[utoipa::path(
    get, path = "/api/villaAPI/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    responses(
        (status = 200, description = "Villa", body = crate::openapi::VillaDoc),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<VillaDto>, JsonApiError> {
    let id = villa_id(path)?;
    Ok(Json(state.villas.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/villaAPI", tag = "villa",
    request_body = crate::openapi::VillaCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VillaDoc),
        (status = 400, description = "Missing body, validation error or duplicate name")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Option<VillaCreateDto>>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let dto = require_body(body)?;
    let created = state.villas.create(dto).await?;
    let location = format!("{VILLA_BASE_PATH}/{}", created.id);
    info!(id = created.id, %location, "villa create request served");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/villaAPI/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    request_body = crate::openapi::VillaUpdateDoc,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Missing body, id mismatch or validation error"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<Option<VillaUpdateDto>>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = villa_id(path)?;
    let dto = require_body(body)?;
    state.villas.update(id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch, path = "/api/villaAPI/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    request_body = [crate::openapi::PatchOperationDoc],
    responses(
        (status = 204, description = "Patched"),
        (status = 400, description = "Invalid id, unknown villa, or patch rejected; nothing is written")
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<Option<JsonPatch>>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = villa_id(path)?;
    let doc = require_body(body)?;
    state.villas.patch(id, &doc).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/villaAPI/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = villa_id(path)?;
    state.villas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
