use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::insurance_plan::{InsurancePlanService, SeaOrmInsurancePlanRepository};
use service::service_type::{SeaOrmServiceTypeRepository, ServiceTypeService};

/// Shared handler state: one service per resource, both over the same pool.
#[derive(Clone)]
pub struct AppState {
    pub plans: Arc<InsurancePlanService<SeaOrmInsurancePlanRepository>>,
    pub service_types: Arc<ServiceTypeService<SeaOrmServiceTypeRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let plan_repo = Arc::new(SeaOrmInsurancePlanRepository::new(db.clone()));
        let service_type_repo = Arc::new(SeaOrmServiceTypeRepository::new(db));
        Self {
            plans: Arc::new(InsurancePlanService::new(plan_repo)),
            service_types: Arc::new(ServiceTypeService::new(service_type_repo)),
        }
    }
}
