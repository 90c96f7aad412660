//! Service types: wire schema, data access and the CRUD service.

pub mod dto;
pub mod repository;
pub mod service;

pub use dto::ServiceTypeDto;
pub use repository::{SeaOrmServiceTypeRepository, ServiceTypeRepository};
pub use service::ServiceTypeService;

/// Resource kind used in not-found messages.
pub const RESOURCE_KIND: &str = "Service Type";
