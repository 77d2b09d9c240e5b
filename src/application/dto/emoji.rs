// src/application/dto/emoji.rs
use crate::domain::catalog::Emoji;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire shape of an emoji record. Timestamps cross the API edge in
/// camelCase; everything else keeps its stored name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmojiDto {
    pub id: i64,
    pub uuid: Uuid,
    pub emoji: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Emoji> for EmojiDto {
    fn from(emoji: Emoji) -> Self {
        Self {
            id: emoji.id.into(),
            uuid: emoji.uuid,
            emoji: emoji.glyph.into(),
            name: emoji.name.into(),
            slug: emoji.slug.into(),
            created_at: emoji.created_at,
            updated_at: emoji.updated_at,
        }
    }
}
