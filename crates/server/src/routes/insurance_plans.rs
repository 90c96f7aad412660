use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::insurance_plan::InsurancePlanDto;
use tracing::info;

use crate::{errors::ApiError, state::AppState};

/// Optional field queries on the list endpoint. At most one selector may be used.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlanQuery {
    /// Exact plan name
    pub plan_name: Option<String>,
    /// Premium strictly below this amount
    #[param(value_type = Option<f64>)]
    pub max_premium: Option<Decimal>,
    /// Inclusive lower deductible bound, requires `maxDeductible`
    #[param(value_type = Option<f64>)]
    pub min_deductible: Option<Decimal>,
    /// Inclusive upper deductible bound, requires `minDeductible`
    #[param(value_type = Option<f64>)]
    pub max_deductible: Option<Decimal>,
}

#[utoipa::path(
    post, path = "/api/insurance-plans", tag = "insurance-plans",
    request_body = crate::openapi::InsurancePlanDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::InsurancePlanDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InsurancePlanDto>, JsonRejection>,
) -> Result<(StatusCode, Json<InsurancePlanDto>), ApiError> {
    let Json(input) = payload?;
    let created = state.plans.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/insurance-plans", tag = "insurance-plans",
    params(PlanQuery),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::InsurancePlanDoc]),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<PlanQuery>, QueryRejection>,
) -> Result<Json<Vec<InsurancePlanDto>>, ApiError> {
    let Query(q) = query?;
    let plans = match (q.plan_name, q.max_premium, q.min_deductible, q.max_deductible) {
        (None, None, None, None) => state.plans.list().await?,
        (Some(name), None, None, None) => state.plans.find_by_plan_name(&name).await?.into_iter().collect(),
        (None, Some(premium), None, None) => state.plans.find_cheaper_than(premium).await?,
        (None, None, Some(min), Some(max)) => state.plans.find_by_deductible_range(min, max).await?,
        _ => {
            return Err(ApiError::BadRequest(
                "use exactly one of planName, maxPremium, or minDeductible with maxDeductible".into(),
            ))
        }
    };
    info!(count = plans.len(), "list insurance plans");
    Ok(Json(plans))
}

#[utoipa::path(
    get, path = "/api/insurance-plans/{id}", tag = "insurance-plans",
    params(("id" = i64, Path, description = "Insurance plan id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::InsurancePlanDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<InsurancePlanDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.plans.get_by_id(id).await?))
}

#[utoipa::path(
    put, path = "/api/insurance-plans/{id}", tag = "insurance-plans",
    params(("id" = i64, Path, description = "Insurance plan id")),
    request_body = crate::openapi::InsurancePlanDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::InsurancePlanDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<InsurancePlanDto>, JsonRejection>,
) -> Result<Json<InsurancePlanDto>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.plans.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/insurance-plans/{id}", tag = "insurance-plans",
    params(("id" = i64, Path, description = "Insurance plan id")),
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
    state.plans.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
