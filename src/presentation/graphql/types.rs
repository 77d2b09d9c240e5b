// src/presentation/graphql/types.rs
use crate::application::dto::GlizzyDto;
use async_graphql::{ComplexObject, Context, ID, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Per-request origin and media prefix used to turn stored relative image
/// paths into absolute URLs at serving time.
#[derive(Debug, Clone)]
pub struct RequestBase {
    pub origin: String,
    pub media_url: String,
}

impl RequestBase {
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}{}", self.origin, self.media_url, path)
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex, name = "Glizzy")]
pub struct GlizzyNode {
    pub id: ID,
    pub uuid: Uuid,
    pub name: String,
    pub slug: String,
    pub short_info: String,
    pub long_info: String,
    #[graphql(skip)]
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[ComplexObject]
impl GlizzyNode {
    /// Absolute URL of the stored image, or null when no image is set.
    async fn image(&self, ctx: &Context<'_>) -> Option<String> {
        let path = self.image_path.as_ref()?;
        match ctx.data_opt::<RequestBase>() {
            Some(base) => Some(base.absolute_url(path)),
            None => Some(path.clone()),
        }
    }
}

impl From<GlizzyDto> for GlizzyNode {
    fn from(dto: GlizzyDto) -> Self {
        Self {
            id: ID(dto.id.to_string()),
            uuid: dto.uuid,
            name: dto.name,
            slug: dto.slug,
            short_info: dto.short_info,
            long_info: dto.long_info,
            image_path: dto.image,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}
