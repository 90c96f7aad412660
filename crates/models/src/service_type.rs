use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const SERVICE_NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Closed set of service categories, persisted by variant name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    #[sea_orm(string_value = "PREVENTIVE")]
    Preventive,
    #[sea_orm(string_value = "DIAGNOSTIC")]
    Diagnostic,
    #[sea_orm(string_value = "PRIMARY_CARE")]
    PrimaryCare,
    #[sea_orm(string_value = "SPECIALIST")]
    Specialist,
    #[sea_orm(string_value = "EMERGENCY")]
    Emergency,
    #[sea_orm(string_value = "SURGERY")]
    Surgery,
    #[sea_orm(string_value = "MENTAL_HEALTH")]
    MentalHealth,
    #[sea_orm(string_value = "PHARMACY")]
    Pharmacy,
    #[sea_orm(string_value = "LABORATORY")]
    Laboratory,
    #[sea_orm(string_value = "REHABILITATION")]
    Rehabilitation,
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_value())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub service_name: String,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub description: Option<String>,
    pub category: Option<ServiceCategory>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_service_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("serviceName is required".into()));
    }
    if name.chars().count() > SERVICE_NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("serviceName must be at most {SERVICE_NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_description(description: Option<&str>) -> Result<(), errors::ModelError> {
    match description {
        Some(d) if d.chars().count() > DESCRIPTION_MAX_LEN => Err(errors::ModelError::Validation(format!(
            "description must be at most {DESCRIPTION_MAX_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Validated column values for one service type row.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceTypeFields {
    pub service_name: String,
    pub description: Option<String>,
    pub category: Option<ServiceCategory>,
}

impl ServiceTypeFields {
    pub fn new(
        service_name: &str,
        description: Option<&str>,
        category: Option<ServiceCategory>,
    ) -> Result<Self, errors::ModelError> {
        validate_service_name(service_name)?;
        validate_description(description)?;
        Ok(Self {
            service_name: service_name.to_string(),
            description: description.map(str::to_string),
            category,
        })
    }

    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            service_name: sea_orm::Set(self.service_name),
            description: sea_orm::Set(self.description),
            category: sea_orm::Set(self.category),
        }
    }

    pub fn into_active_model_for(self, id: i64) -> ActiveModel {
        ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(id),
            ..self.into_new_active_model()
        }
    }
}
