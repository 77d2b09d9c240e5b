// src/presentation/http/controllers/glizzys.rs
use crate::application::{
    commands::{CreateGlizzyCommand, UpdateGlizzyCommand},
    dto::{GlizzyDto, Page},
    queries::ListGlizzysQuery,
};
use crate::presentation::http::envelope::Enveloped;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct GlizzyListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default, rename = "perPage")]
    pub per_page: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateGlizzyRequest {
    pub name: String,
    pub short_info: String,
    pub long_info: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGlizzyRequest {
    pub name: Option<String>,
    pub short_info: Option<String>,
    pub long_info: Option<String>,
    pub image: Option<String>,
}

pub async fn list_glizzys(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GlizzyListParams>,
) -> HttpResult<Enveloped<Page<GlizzyDto>>> {
    state
        .services
        .glizzy_queries
        .list(ListGlizzysQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(|page| Enveloped(StatusCode::OK, page))
}

pub async fn get_glizzy(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Enveloped<GlizzyDto>> {
    state
        .services
        .glizzy_queries
        .get_by_slug(slug)
        .await
        .into_http()
        .map(|dto| Enveloped(StatusCode::OK, dto))
}

pub async fn create_glizzy(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateGlizzyRequest>,
) -> HttpResult<Enveloped<GlizzyDto>> {
    let command = CreateGlizzyCommand {
        name: payload.name,
        short_info: payload.short_info,
        long_info: payload.long_info,
        image: payload.image,
        slug: payload.slug,
    };

    state
        .services
        .glizzy_commands
        .create(command)
        .await
        .into_http()
        .map(|dto| Enveloped(StatusCode::CREATED, dto))
}

pub async fn update_glizzy(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateGlizzyRequest>,
) -> HttpResult<Enveloped<GlizzyDto>> {
    let command = UpdateGlizzyCommand {
        name: payload.name,
        short_info: payload.short_info,
        long_info: payload.long_info,
        image: payload.image,
    };

    state
        .services
        .glizzy_commands
        .update(slug, command)
        .await
        .into_http()
        .map(|dto| Enveloped(StatusCode::OK, dto))
}

pub async fn delete_glizzy(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Enveloped<serde_json::Value>> {
    state
        .services
        .glizzy_commands
        .delete(slug.clone())
        .await
        .into_http()?;

    Ok(Enveloped(StatusCode::OK, json!({ "deleted": slug })))
}
