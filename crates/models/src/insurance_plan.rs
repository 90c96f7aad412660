use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, money};

pub const PLAN_NAME_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insurance_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub plan_name: String,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub monthly_premium: Decimal,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub deductible: Decimal,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub out_of_pocket_max: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_plan_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("planName is required".into()));
    }
    if name.chars().count() > PLAN_NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("planName must be at most {PLAN_NAME_MAX_LEN} characters")));
    }
    Ok(())
}

/// Validated column values for one plan row, amounts already rescaled to two places.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanFields {
    pub plan_name: String,
    pub monthly_premium: Decimal,
    pub deductible: Decimal,
    pub out_of_pocket_max: Decimal,
}

impl PlanFields {
    pub fn new(
        plan_name: &str,
        monthly_premium: Decimal,
        deductible: Decimal,
        out_of_pocket_max: Decimal,
    ) -> Result<Self, errors::ModelError> {
        validate_plan_name(plan_name)?;
        Ok(Self {
            plan_name: plan_name.to_string(),
            monthly_premium: money::validate_amount("monthlyPremium", monthly_premium)?,
            deductible: money::validate_amount("deductible", deductible)?,
            out_of_pocket_max: money::validate_amount("outOfPocketMax", out_of_pocket_max)?,
        })
    }

    /// Row without an id; the store assigns one on insert.
    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            plan_name: sea_orm::Set(self.plan_name),
            monthly_premium: sea_orm::Set(self.monthly_premium),
            deductible: sea_orm::Set(self.deductible),
            out_of_pocket_max: sea_orm::Set(self.out_of_pocket_max),
        }
    }

    /// Overwrite every mutable column of an existing row.
    pub fn into_active_model_for(self, id: i64) -> ActiveModel {
        ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(id),
            ..self.into_new_active_model()
        }
    }
}
