// src/domain/catalog/emoji.rs
use crate::domain::catalog::value_objects::{EmojiGlyph, EmojiId, EntityName, Slug};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Emoji {
    pub id: EmojiId,
    pub uuid: Uuid,
    pub glyph: EmojiGlyph,
    pub name: EntityName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEmoji {
    pub uuid: Uuid,
    pub glyph: EmojiGlyph,
    pub name: EntityName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update addressed by slug. The slug itself is fixed at creation
/// time and never regenerated.
#[derive(Debug, Clone)]
pub struct EmojiUpdate {
    pub slug: Slug,
    pub glyph: Option<EmojiGlyph>,
    pub name: Option<EntityName>,
    pub updated_at: DateTime<Utc>,
}

impl EmojiUpdate {
    pub fn new(slug: Slug, updated_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            glyph: None,
            name: None,
            updated_at,
        }
    }

    pub fn with_glyph(mut self, glyph: EmojiGlyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn with_name(mut self, name: EntityName) -> Self {
        self.name = Some(name);
        self
    }
}
