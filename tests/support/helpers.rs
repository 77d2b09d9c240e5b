// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryEmojiRepo, InMemoryGlizzyRepo};
use axum::body::{self, Body};
use axum::http::Response;
use glizzy_api::application::ports::{
    time::Clock,
    util::{Slugifier, TokenGenerator},
};
use glizzy_api::application::services::ApplicationServices;
use glizzy_api::domain::catalog::{EmojiRepository, GlizzyRepository, SlugProbe};
use glizzy_api::infrastructure::util::{AlphanumericTokenGenerator, DefaultSlugifier};
use glizzy_api::presentation::graphql::build_schema;
use glizzy_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Services wired against in-memory repositories and a fixed clock.
pub fn build_test_services() -> Arc<ApplicationServices> {
    let emoji_repo_impl = Arc::new(InMemoryEmojiRepo::new());
    let glizzy_repo_impl = Arc::new(InMemoryGlizzyRepo::new());

    let emoji_repo: Arc<dyn EmojiRepository> = emoji_repo_impl.clone();
    let emoji_slug_probe: Arc<dyn SlugProbe> = emoji_repo_impl;
    let glizzy_repo: Arc<dyn GlizzyRepository> = glizzy_repo_impl.clone();
    let glizzy_slug_probe: Arc<dyn SlugProbe> = glizzy_repo_impl;

    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new_years_day());
    let slugifier: Arc<dyn Slugifier> = Arc::new(DefaultSlugifier);
    let tokens: Arc<dyn TokenGenerator> = Arc::new(AlphanumericTokenGenerator);

    Arc::new(ApplicationServices::new(
        emoji_repo,
        emoji_slug_probe,
        glizzy_repo,
        glizzy_slug_probe,
        clock,
        slugifier,
        tokens,
    ))
}

pub fn build_test_state() -> HttpState {
    let services = build_test_services();
    let schema = build_schema(Arc::clone(&services));
    HttpState {
        services,
        schema,
        media_url: "/media/".into(),
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state())
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

pub fn json_request(
    method: &str,
    uri: &str,
    payload: &Value,
) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build request")
}
