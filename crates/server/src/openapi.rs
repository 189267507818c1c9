use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: i32,
    pub entity_id: String,
    pub company_name: String,
    pub email: String,
    /// `Active`, `On Hold` or `Inactive`
    pub status: String,
    pub date_created: String,
    pub last_updated: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInputDoc {
    pub company_name: String,
    pub email: String,
    /// Defaults to `Active`
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatchDoc {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderDoc {
    pub id: i32,
    pub tran_id: String,
    /// Internal id of the owning customer
    pub entity: i32,
    pub total: f64,
    /// `Pending Approval`, `Pending Fulfillment`, `Pending Billing`, `Billed`, `Closed` or `Cancelled`
    pub status: String,
    /// `YYYY-MM-DD`
    pub trandate: String,
    pub last_updated: Option<String>,
}

#[derive(ToSchema)]
pub struct SalesOrderInputDoc {
    pub entity: i32,
    pub total: f64,
    /// Defaults to `Pending Fulfillment`
    pub status: Option<String>,
    /// Defaults to today
    pub trandate: Option<String>,
}

#[derive(ToSchema)]
pub struct SalesOrderPatchDoc {
    pub entity: Option<i32>,
    pub total: Option<f64>,
    pub status: Option<String>,
    pub trandate: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "GetSuite: Mock NetSuite API", description = "A persistent mock server simulating SuiteTalk REST record services."),
    paths(
        crate::routes::health,
        crate::routes::customer::list,
        crate::routes::customer::create,
        crate::routes::customer::get,
        crate::routes::customer::update,
        crate::routes::customer::delete,
        crate::routes::sales_order::list,
        crate::routes::sales_order::create,
        crate::routes::sales_order::get,
        crate::routes::sales_order::update,
        crate::routes::sales_order::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CustomerInputDoc,
            CustomerPatchDoc,
            SalesOrderDoc,
            SalesOrderInputDoc,
            SalesOrderPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customer"),
        (name = "salesorder")
    )
)]
pub struct ApiDoc;

/// The document with record paths re-keyed under `base_path`, so it matches
/// where the router actually mounts them.
pub fn document_for(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if base_path != configs::DEFAULT_BASE_PATH {
        let paths = std::mem::take(&mut doc.paths.paths);
        doc.paths.paths = paths
            .into_iter()
            .map(|(key, item)| match key.strip_prefix(configs::DEFAULT_BASE_PATH) {
                Some(rest) => (format!("{base_path}{rest}"), item),
                None => (key, item),
            })
            .collect();
    }
    doc
}

pub async fn openapi_json(doc: utoipa::openapi::OpenApi) -> Json<utoipa::openapi::OpenApi> {
    Json(doc)
}
