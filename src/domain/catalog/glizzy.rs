// src/domain/catalog/glizzy.rs
use crate::domain::catalog::value_objects::{
    EntityName, GlizzyId, ImagePath, LongInfo, ShortInfo, Slug,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Glizzy {
    pub id: GlizzyId,
    pub uuid: Uuid,
    pub name: EntityName,
    pub slug: Slug,
    pub short_info: ShortInfo,
    pub long_info: LongInfo,
    pub image: Option<ImagePath>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGlizzy {
    pub uuid: Uuid,
    pub name: EntityName,
    pub slug: Slug,
    pub short_info: ShortInfo,
    pub long_info: LongInfo,
    pub image: Option<ImagePath>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update addressed by slug. The slug never changes after creation;
/// a `None` image leaves the stored image untouched.
#[derive(Debug, Clone)]
pub struct GlizzyUpdate {
    pub slug: Slug,
    pub name: Option<EntityName>,
    pub short_info: Option<ShortInfo>,
    pub long_info: Option<LongInfo>,
    pub image: Option<ImagePath>,
    pub updated_at: DateTime<Utc>,
}

impl GlizzyUpdate {
    pub fn new(slug: Slug, updated_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            name: None,
            short_info: None,
            long_info: None,
            image: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: EntityName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_short_info(mut self, short_info: ShortInfo) -> Self {
        self.short_info = Some(short_info);
        self
    }

    pub fn with_long_info(mut self, long_info: LongInfo) -> Self {
        self.long_info = Some(long_info);
        self
    }

    pub fn with_image(mut self, image: ImagePath) -> Self {
        self.image = Some(image);
        self
    }
}
