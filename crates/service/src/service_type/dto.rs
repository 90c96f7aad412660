use models::service_type::{self, ServiceCategory, ServiceTypeFields};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Wire representation of a service type. `category` only accepts the
/// names of [`ServiceCategory`]; anything else fails to decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub service_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<ServiceCategory>,
}

impl ServiceTypeDto {
    pub fn to_fields(&self) -> Result<ServiceTypeFields, ServiceError> {
        Ok(ServiceTypeFields::new(&self.service_name, self.description.as_deref(), self.category)?)
    }
}

impl From<service_type::Model> for ServiceTypeDto {
    fn from(m: service_type::Model) -> Self {
        Self {
            id: Some(m.id),
            service_name: m.service_name,
            description: m.description,
            category: m.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_known_category() {
        let dto: ServiceTypeDto = serde_json::from_value(json!({
            "serviceName": "MRI Scan",
            "description": "Imaging",
            "category": "DIAGNOSTIC"
        }))
        .unwrap();
        assert_eq!(dto.category, Some(ServiceCategory::Diagnostic));
        assert_eq!(dto.description.as_deref(), Some("Imaging"));
    }

    #[test]
    fn rejects_unknown_category() {
        let res = serde_json::from_value::<ServiceTypeDto>(json!({"serviceName": "Botox", "category": "COSMETIC"}));
        assert!(res.is_err());
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let dto: ServiceTypeDto = serde_json::from_value(json!({"serviceName": "Walk-in"})).unwrap();
        assert_eq!(dto.description, None);
        assert_eq!(dto.category, None);
    }
}
