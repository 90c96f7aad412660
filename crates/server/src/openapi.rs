use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Insurance plan representation. Amounts are JSON numbers with at most two decimals.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePlanDoc {
    /// Assigned by the server; ignored on input
    pub id: Option<i64>,
    #[schema(max_length = 100, example = "Gold")]
    pub plan_name: String,
    #[schema(example = 450.00)]
    pub monthly_premium: f64,
    #[schema(example = 1000.00)]
    pub deductible: f64,
    #[schema(example = 5000.00)]
    pub out_of_pocket_max: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeDoc {
    /// Assigned by the server; ignored on input
    pub id: Option<i64>,
    #[schema(max_length = 100, example = "MRI Scan")]
    pub service_name: String,
    #[schema(max_length = 500)]
    pub description: Option<String>,
    /// PREVENTIVE, DIAGNOSTIC, PRIMARY_CARE, SPECIALIST, EMERGENCY, SURGERY,
    /// MENTAL_HEALTH, PHARMACY, LABORATORY or REHABILITATION
    #[schema(example = "DIAGNOSTIC")]
    pub category: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub timestamp: String,
    pub message: String,
    /// Present on 400 and 500 responses
    pub details: Option<String>,
    pub status: u16,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::insurance_plans::create,
        crate::routes::insurance_plans::list,
        crate::routes::insurance_plans::get_by_id,
        crate::routes::insurance_plans::update,
        crate::routes::insurance_plans::delete_by_id,
        crate::routes::service_types::create,
        crate::routes::service_types::list,
        crate::routes::service_types::get_by_id,
        crate::routes::service_types::update,
        crate::routes::service_types::delete_by_id,
    ),
    components(
        schemas(
            HealthResponse,
            InsurancePlanDoc,
            ServiceTypeDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "insurance-plans"),
        (name = "service-types")
    )
)]
pub struct ApiDoc;
