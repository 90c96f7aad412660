//! Insurance plans: wire schema, data access and the CRUD service.

pub mod dto;
pub mod repository;
pub mod service;

pub use dto::InsurancePlanDto;
pub use repository::{InsurancePlanRepository, SeaOrmInsurancePlanRepository};
pub use service::InsurancePlanService;

/// Resource kind used in not-found messages.
pub const RESOURCE_KIND: &str = "Insurance Plan";
