// src/presentation/graphql/mod.rs
pub mod handlers;
pub mod schema;
pub mod types;

pub use schema::{CatalogSchema, QueryRoot, build_schema};
pub use types::RequestBase;
