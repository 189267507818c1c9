use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use models::sales_order::{self, SalesOrderInput, SalesOrderPatch};
use service::errors::ServiceError;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/services/rest/record/v1/salesorder", tag = "salesorder",
    responses(
        (status = 200, description = "All sales order records", body = [crate::openapi::SalesOrderDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<sales_order::Model>>, JsonApiError> {
    let list = state.sales_orders.list().await?;
    info!(count = list.len(), "list sales orders");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/services/rest/record/v1/salesorder", tag = "salesorder",
    request_body = crate::openapi::SalesOrderInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SalesOrderDoc),
        (status = 400, description = "Missing or unknown customer, or invalid field"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<SalesOrderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<sales_order::Model>), JsonApiError> {
    let Json(input) = payload?;
    match state.sales_orders.create(input).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e @ ServiceError::UnknownCustomer(_)) => Err(JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Bad Request",
            Some(format!("{e}. Cannot create Sales Order.")),
        )),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get, path = "/services/rest/record/v1/salesorder/{id}", tag = "salesorder",
    params(("id" = i32, Path, description = "Sales order internal ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SalesOrderDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<sales_order::Model>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.sales_orders.get(id).await?))
}

#[utoipa::path(
    put, path = "/services/rest/record/v1/salesorder/{id}", tag = "salesorder",
    params(("id" = i32, Path, description = "Sales order internal ID")),
    request_body = crate::openapi::SalesOrderPatchDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Unknown customer or invalid field"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SalesOrderPatch>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    state.sales_orders.update(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/services/rest/record/v1/salesorder/{id}", tag = "salesorder",
    params(("id" = i32, Path, description = "Sales order internal ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    state.sales_orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
