use models::insurance_plan::{self, PlanFields};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Wire representation of an insurance plan.
///
/// `id` is ignored on input; the store assigns it on create and the path
/// supplies it on update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePlanDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub plan_name: String,
    pub monthly_premium: Decimal,
    pub deductible: Decimal,
    pub out_of_pocket_max: Decimal,
}

impl InsurancePlanDto {
    /// Copy the mutable fields into validated column values.
    pub fn to_fields(&self) -> Result<PlanFields, ServiceError> {
        Ok(PlanFields::new(&self.plan_name, self.monthly_premium, self.deductible, self.out_of_pocket_max)?)
    }
}

impl From<insurance_plan::Model> for InsurancePlanDto {
    fn from(m: insurance_plan::Model) -> Self {
        Self {
            id: Some(m.id),
            plan_name: m.plan_name,
            monthly_premium: m.monthly_premium,
            deductible: m.deductible,
            out_of_pocket_max: m.out_of_pocket_max,
        }
    }
}
