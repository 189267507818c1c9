pub mod customer;
pub mod sales_order;

use axum::{extract::State, http::StatusCode, middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use common::types::Health;

use crate::latency::{self, LatencyConfig};
use crate::openapi;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK"), (status = 503, description = "Store unreachable")))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            error!(err = %e, "health check: database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

/// Build the full application router: record routes under `mock.base_path`,
/// plus `/health` and `/openapi.json` at the root.
pub fn build_router(state: ServerState, mock: &configs::MockConfig, cors: CorsLayer) -> Router {
    let records = Router::new()
        .route("/customer", get(customer::list).post(customer::create))
        .route(
            "/customer/:id",
            get(customer::get).put(customer::update).delete(customer::delete),
        )
        .route("/salesorder", get(sales_order::list).post(sales_order::create))
        .route(
            "/salesorder/:id",
            get(sales_order::get).put(sales_order::update).delete(sales_order::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            LatencyConfig::from(mock),
            latency::simulate_latency,
        ));

    let doc = openapi::document_for(&mock.base_path);

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(move || openapi::openapi_json(doc.clone())))
        .nest(&mock.base_path, records)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
