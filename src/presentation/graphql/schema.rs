// src/presentation/graphql/schema.rs
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::GlizzyFilter;
use crate::application::queries::glizzys::GLIZZY_NOT_FOUND_MESSAGE;
use crate::application::services::ApplicationServices;
use crate::presentation::graphql::types::GlizzyNode;
use crate::presentation::http::error::SERVER_ERROR_MESSAGE;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Error, ID, Object, Result, Schema};

pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(services: Arc<ApplicationServices>) -> CatalogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(services)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every glizzy, ordered by name ascending.
    async fn glizzys(&self, ctx: &Context<'_>) -> Result<Vec<GlizzyNode>> {
        let services = ctx.data::<Arc<ApplicationServices>>()?;
        let glizzys = services
            .glizzy_queries
            .list_all()
            .await
            .map_err(to_graphql_error)?;

        Ok(glizzys.into_iter().map(Into::into).collect())
    }

    /// A single glizzy by `id` and/or `slug`; at least one is required.
    async fn glizzy(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        slug: Option<String>,
    ) -> Result<GlizzyNode> {
        let services = ctx.data::<Arc<ApplicationServices>>()?;

        let id = match id {
            Some(id) => Some(
                id.parse::<i64>()
                    .map_err(|_| Error::new(GLIZZY_NOT_FOUND_MESSAGE))?,
            ),
            None => None,
        };

        let glizzy = services
            .glizzy_queries
            .get_filtered(GlizzyFilter { id, slug })
            .await
            .map_err(to_graphql_error)?;

        Ok(glizzy.into())
    }
}

/// Validation and lookup failures carry their message to the caller;
/// anything infrastructural is logged and replaced with generic wording.
fn to_graphql_error(err: ApplicationError) -> Error {
    match &err {
        ApplicationError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "graphql query failed");
            Error::new(SERVER_ERROR_MESSAGE)
        }
        _ => Error::new(err.message().to_string()),
    }
}
