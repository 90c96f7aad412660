//! Shared building blocks for the healthify workspace: logging setup and
//! small wire types that do not belong to a single resource.

pub mod types;
pub mod utils;
