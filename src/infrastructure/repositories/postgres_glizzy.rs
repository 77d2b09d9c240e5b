// src/infrastructure/repositories/postgres_glizzy.rs
use super::map_sqlx;
use crate::domain::catalog::{
    EntityName, Glizzy, GlizzyId, GlizzyRepository, GlizzyUpdate, ImagePath, LongInfo, NewGlizzy,
    ShortInfo, Slug, SlugProbe,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const GLIZZY_COLUMNS: &str =
    "id, uuid, name, slug, short_info, long_info, image, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresGlizzyRepository {
    pool: PgPool,
}

impl PostgresGlizzyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GlizzyRow {
    id: i64,
    uuid: Uuid,
    name: String,
    slug: String,
    short_info: String,
    long_info: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<GlizzyRow> for Glizzy {
    type Error = DomainError;

    fn try_from(row: GlizzyRow) -> Result<Self, Self::Error> {
        Ok(Glizzy {
            id: GlizzyId::new(row.id)?,
            uuid: row.uuid,
            name: EntityName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            short_info: ShortInfo::new(row.short_info)?,
            long_info: LongInfo::new(row.long_info)?,
            image: row.image.map(ImagePath::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugProbe for PostgresGlizzyRepository {
    async fn exists_by_slug(&self, slug: &Slug) -> DomainResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM glizzys WHERE slug = $1)")
                .bind(slug.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(exists)
    }
}

#[async_trait]
impl GlizzyRepository for PostgresGlizzyRepository {
    async fn insert(&self, glizzy: NewGlizzy) -> DomainResult<Glizzy> {
        let NewGlizzy {
            uuid,
            name,
            slug,
            short_info,
            long_info,
            image,
            created_at,
            updated_at,
        } = glizzy;

        let row = sqlx::query_as::<_, GlizzyRow>(
            "INSERT INTO glizzys (uuid, name, slug, short_info, long_info, image, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, uuid, name, slug, short_info, long_info, image, created_at, updated_at",
        )
        .bind(uuid)
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(short_info.as_str())
        .bind(long_info.as_str())
        .bind(image.as_ref().map(|path| path.as_str().to_string()))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Glizzy::try_from(row)
    }

    async fn update(&self, update: GlizzyUpdate) -> DomainResult<Option<Glizzy>> {
        let GlizzyUpdate {
            slug,
            name,
            short_info,
            long_info,
            image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE glizzys SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            let name_str: String = name.into();
            builder.push(", name = ");
            builder.push_bind(name_str);
        }

        if let Some(short_info) = short_info {
            let short_str: String = short_info.into();
            builder.push(", short_info = ");
            builder.push_bind(short_str);
        }

        if let Some(long_info) = long_info {
            let long_str: String = long_info.into();
            builder.push(", long_info = ");
            builder.push_bind(long_str);
        }

        if let Some(image) = image {
            let image_str: String = image.into();
            builder.push(", image = ");
            builder.push_bind(image_str);
        }

        builder.push(" WHERE slug = ");
        builder.push_bind(slug.as_str().to_string());
        builder.push(" RETURNING ");
        builder.push(GLIZZY_COLUMNS);

        let maybe_row = builder
            .build_query_as::<GlizzyRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        maybe_row.map(Glizzy::try_from).transpose()
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM glizzys WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: GlizzyId) -> DomainResult<Option<Glizzy>> {
        let row = sqlx::query_as::<_, GlizzyRow>(
            "SELECT id, uuid, name, slug, short_info, long_info, image, created_at, updated_at
             FROM glizzys WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Glizzy::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Glizzy>> {
        let row = sqlx::query_as::<_, GlizzyRow>(
            "SELECT id, uuid, name, slug, short_info, long_info, image, created_at, updated_at
             FROM glizzys WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Glizzy::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Glizzy>> {
        let rows = sqlx::query_as::<_, GlizzyRow>(
            "SELECT id, uuid, name, slug, short_info, long_info, image, created_at, updated_at
             FROM glizzys ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Glizzy::try_from).collect()
    }

    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<(Vec<Glizzy>, u64)> {
        let rows = sqlx::query_as::<_, GlizzyRow>(
            "SELECT id, uuid, name, slug, short_info, long_info, image, created_at, updated_at
             FROM glizzys ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM glizzys")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let glizzys = rows
            .into_iter()
            .map(Glizzy::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((glizzys, count as u64))
    }
}
