use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::service_type::ServiceCategory;
use serde::Deserialize;
use service::service_type::ServiceTypeDto;
use tracing::info;

use crate::{errors::ApiError, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ServiceTypeQuery {
    /// Exact service name
    pub service_name: Option<String>,
    /// One of the service category names, e.g. `DIAGNOSTIC`
    #[param(value_type = Option<String>)]
    pub category: Option<ServiceCategory>,
    /// Case-insensitive substring of the service name
    pub q: Option<String>,
}

#[utoipa::path(
    post, path = "/api/service-types", tag = "service-types",
    request_body = crate::openapi::ServiceTypeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceTypeDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ServiceTypeDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ServiceTypeDto>), ApiError> {
    let Json(input) = payload?;
    let created = state.service_types.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/service-types", tag = "service-types",
    params(ServiceTypeQuery),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::ServiceTypeDoc]),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ServiceTypeQuery>, QueryRejection>,
) -> Result<Json<Vec<ServiceTypeDto>>, ApiError> {
    let Query(q) = query?;
    let svc = &state.service_types;
    let found = match (q.service_name, q.category, q.q) {
        (None, None, None) => svc.list().await?,
        (Some(name), None, None) => svc.find_by_service_name(&name).await?.into_iter().collect(),
        (None, Some(category), None) => svc.find_by_category(category).await?,
        (None, None, Some(keyword)) => svc.search_by_name(&keyword).await?,
        _ => return Err(ApiError::BadRequest("use at most one of serviceName, category or q".into())),
    };
    info!(count = found.len(), "list service types");
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/api/service-types/{id}", tag = "service-types",
    params(("id" = i64, Path, description = "Service type id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceTypeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ServiceTypeDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service_types.get_by_id(id).await?))
}

#[utoipa::path(
    put, path = "/api/service-types/{id}", tag = "service-types",
    params(("id" = i64, Path, description = "Service type id")),
    request_body = crate::openapi::ServiceTypeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceTypeDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ServiceTypeDto>, JsonRejection>,
) -> Result<Json<ServiceTypeDto>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.service_types.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/service-types/{id}", tag = "service-types",
    params(("id" = i64, Path, description = "Service type id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.service_types.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
