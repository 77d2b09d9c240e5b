// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::graphql::CatalogSchema;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub schema: CatalogSchema,
    /// URL prefix under which stored media paths are served.
    pub media_url: String,
}
