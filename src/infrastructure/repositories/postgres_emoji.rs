// src/infrastructure/repositories/postgres_emoji.rs
use super::map_sqlx;
use crate::domain::catalog::{
    Emoji, EmojiGlyph, EmojiId, EmojiRepository, EmojiUpdate, EntityName, NewEmoji, Slug, SlugProbe,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const EMOJI_COLUMNS: &str = "id, uuid, emoji, name, slug, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresEmojiRepository {
    pool: PgPool,
}

impl PostgresEmojiRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmojiRow {
    id: i64,
    uuid: Uuid,
    emoji: String,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmojiRow> for Emoji {
    type Error = DomainError;

    fn try_from(row: EmojiRow) -> Result<Self, Self::Error> {
        Ok(Emoji {
            id: EmojiId::new(row.id)?,
            uuid: row.uuid,
            glyph: EmojiGlyph::new(row.emoji)?,
            name: EntityName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugProbe for PostgresEmojiRepository {
    async fn exists_by_slug(&self, slug: &Slug) -> DomainResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM emojis WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(exists)
    }
}

#[async_trait]
impl EmojiRepository for PostgresEmojiRepository {
    async fn insert(&self, emoji: NewEmoji) -> DomainResult<Emoji> {
        let NewEmoji {
            uuid,
            glyph,
            name,
            slug,
            created_at,
            updated_at,
        } = emoji;

        let row = sqlx::query_as::<_, EmojiRow>(
            "INSERT INTO emojis (uuid, emoji, name, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, uuid, emoji, name, slug, created_at, updated_at",
        )
        .bind(uuid)
        .bind(glyph.as_str())
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Emoji::try_from(row)
    }

    async fn update(&self, update: EmojiUpdate) -> DomainResult<Option<Emoji>> {
        let EmojiUpdate {
            slug,
            glyph,
            name,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE emojis SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(glyph) = glyph {
            let glyph_str: String = glyph.into();
            builder.push(", emoji = ");
            builder.push_bind(glyph_str);
        }

        if let Some(name) = name {
            let name_str: String = name.into();
            builder.push(", name = ");
            builder.push_bind(name_str);
        }

        builder.push(" WHERE slug = ");
        builder.push_bind(slug.as_str().to_string());
        builder.push(" RETURNING ");
        builder.push(EMOJI_COLUMNS);

        let maybe_row = builder
            .build_query_as::<EmojiRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        maybe_row.map(Emoji::try_from).transpose()
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM emojis WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: EmojiId) -> DomainResult<Option<Emoji>> {
        let row = sqlx::query_as::<_, EmojiRow>(
            "SELECT id, uuid, emoji, name, slug, created_at, updated_at
             FROM emojis WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Emoji::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Emoji>> {
        let row = sqlx::query_as::<_, EmojiRow>(
            "SELECT id, uuid, emoji, name, slug, created_at, updated_at
             FROM emojis WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Emoji::try_from).transpose()
    }

    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<(Vec<Emoji>, u64)> {
        let rows = sqlx::query_as::<_, EmojiRow>(
            "SELECT id, uuid, emoji, name, slug, created_at, updated_at
             FROM emojis ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM emojis")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let emojis = rows
            .into_iter()
            .map(Emoji::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((emojis, count as u64))
    }
}
