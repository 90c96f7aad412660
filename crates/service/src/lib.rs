//! Service layer providing resource-oriented CRUD operations on top of models.
//! - Repositories own data access; services own existence checks and wire mapping.
//! - Reuses validation and entity definitions in `models` crate.
//! - Both resources share `errors::ServiceError`.

pub mod errors;
pub mod insurance_plan;
pub mod service_type;
#[cfg(test)]
pub mod test_support;
