//! Storage-side schema: SeaORM entities for both resource kinds, their field
//! validators and database connection helpers.

pub mod errors;
pub mod db;
pub mod money;
pub mod insurance_plan;
pub mod service_type;
