use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use models::customer::{self, CustomerInput, CustomerPatch};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/services/rest/record/v1/customer", tag = "customer",
    responses(
        (status = 200, description = "All customer records", body = [crate::openapi::CustomerDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<customer::Model>>, JsonApiError> {
    let list = state.customers.list().await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/services/rest/record/v1/customer", tag = "customer",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<(StatusCode, Json<customer::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.customers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/services/rest/record/v1/customer/{id}", tag = "customer",
    params(("id" = i32, Path, description = "Customer internal ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<customer::Model>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.customers.get(id).await?))
}

#[utoipa::path(
    put, path = "/services/rest/record/v1/customer/{id}", tag = "customer",
    params(("id" = i32, Path, description = "Customer internal ID")),
    request_body = crate::openapi::CustomerPatchDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CustomerPatch>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    state.customers.update(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/services/rest/record/v1/customer/{id}", tag = "customer",
    params(("id" = i32, Path, description = "Customer internal ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Customer still has sales orders")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    state.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
