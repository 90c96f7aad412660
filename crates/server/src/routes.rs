use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod insurance_plans;
pub mod service_types;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Route table: (verb, path) -> handler for both resources, plus health and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let plans: Router<AppState> = Router::new()
        .route(
            "/api/insurance-plans",
            get(insurance_plans::list).post(insurance_plans::create),
        )
        .route(
            "/api/insurance-plans/:id",
            get(insurance_plans::get_by_id)
                .put(insurance_plans::update)
                .delete(insurance_plans::delete_by_id),
        );

    let service_types: Router<AppState> = Router::new()
        .route(
            "/api/service-types",
            get(service_types::list).post(service_types::create),
        )
        .route(
            "/api/service-types/:id",
            get(service_types::get_by_id)
                .put(service_types::update)
                .delete(service_types::delete_by_id),
        );

    Router::new()
        .route("/health", get(health))
        .merge(plans)
        .merge(service_types)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and connection failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
