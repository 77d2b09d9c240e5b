// src/presentation/graphql/handlers.rs
use crate::presentation::graphql::types::RequestBase;
use crate::presentation::http::state::HttpState;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    http::{HeaderMap, header},
};

pub async fn graphql_handler(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let base = RequestBase {
        origin: request_origin(&headers),
        media_url: state.media_url.clone(),
    };

    let request = req.into_inner().data(base);
    state.schema.execute(request).await.into()
}

/// Origin of the inbound request, honouring a reverse proxy's forwarded
/// scheme when present.
fn request_origin(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");

    format!("{scheme}://{host}")
}
