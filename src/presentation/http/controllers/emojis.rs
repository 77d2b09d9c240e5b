// src/presentation/http/controllers/emojis.rs
use crate::application::{
    commands::{CreateEmojiCommand, UpdateEmojiCommand},
    dto::{EmojiDto, Page},
    queries::ListEmojisQuery,
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
pub struct EmojiListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default, rename = "perPage")]
    pub per_page: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateEmojiRequest {
    pub emoji: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmojiRequest {
    pub emoji: Option<String>,
    pub name: Option<String>,
}

pub async fn list_emojis(
    Extension(state): Extension<HttpState>,
    Query(params): Query<EmojiListParams>,
) -> HttpResult<Enveloped<Page<EmojiDto>>> {
    state
        .services
        .emoji_queries
        .list(ListEmojisQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(|page| Enveloped(StatusCode::OK, page))
}

pub async fn get_emoji(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Enveloped<EmojiDto>> {
    state
        .services
        .emoji_queries
        .get_by_slug(slug)
        .await
        .into_http()
        .map(|dto| Enveloped(StatusCode::OK, dto))
}

pub async fn create_emoji(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateEmojiRequest>,
) -> HttpResult<Enveloped<EmojiDto>> {
    let command = CreateEmojiCommand {
        emoji: payload.emoji,
        name: payload.name,
        slug: payload.slug,
    };

    state
        .services
        .emoji_commands
        .create(command)
        .await
        .into_http()
        .map(|dto| Enveloped(StatusCode::CREATED, dto))
}

pub async fn update_emoji(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateEmojiRequest>,
) -> HttpResult<Enveloped<EmojiDto>> {
    let command = UpdateEmojiCommand {
        emoji: payload.emoji,
        name: payload.name,
    };

    state
        .services
        .emoji_commands
        .update(slug, command)
        .await
        .into_http()
        .map(|dto| Enveloped(StatusCode::OK, dto))
}

pub async fn delete_emoji(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Enveloped<serde_json::Value>> {
    state
        .services
        .emoji_commands
        .delete(slug.clone())
        .await
        .into_http()?;

    Ok(Enveloped(StatusCode::OK, json!({ "deleted": slug })))
}
