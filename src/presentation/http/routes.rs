// src/presentation/http/routes.rs
use crate::presentation::graphql::handlers::graphql_handler;
use crate::presentation::http::controllers::{emojis, glizzys};
use crate::presentation::http::error::{NOT_FOUND_ROUTE_MESSAGE, SERVER_ERROR_MESSAGE, error_body};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    body::Body,
    http::{Method, Response, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use std::any::Any;
use std::time::Duration;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/graphql", post(graphql_handler))
        .route(
            "/api/v1/emojis",
            get(emojis::list_emojis).post(emojis::create_emoji),
        )
        .route(
            "/api/v1/emojis/{slug}",
            get(emojis::get_emoji)
                .put(emojis::update_emoji)
                .delete(emojis::delete_emoji),
        )
        .route(
            "/api/v1/glizzys",
            get(glizzys::list_glizzys).post(glizzys::create_glizzy),
        )
        .route(
            "/api/v1/glizzys/{slug}",
            get(glizzys::get_glizzy)
                .put(glizzys::update_glizzy)
                .delete(glizzys::delete_glizzy),
        )
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

/// Unmatched routes get the fixed JSON body instead of a bare 404 page.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(error_body(StatusCode::NOT_FOUND, NOT_FOUND_ROUTE_MESSAGE)),
    )
}

/// Handler panics get the fixed 500 body so a framework error page never
/// reaches an API caller.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            SERVER_ERROR_MESSAGE,
        )),
    )
        .into_response()
}
