// src/application/dto/glizzy.rs
use crate::domain::catalog::Glizzy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire shape of a glizzy record. The image stays a storage-relative path
/// here; only the GraphQL layer resolves it against a request base URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlizzyDto {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub slug: String,
    pub short_info: String,
    pub long_info: String,
    pub image: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Glizzy> for GlizzyDto {
    fn from(glizzy: Glizzy) -> Self {
        Self {
            id: glizzy.id.into(),
            uuid: glizzy.uuid,
            name: glizzy.name.into(),
            slug: glizzy.slug.into(),
            short_info: glizzy.short_info.into(),
            long_info: glizzy.long_info.into(),
            image: glizzy.image.map(Into::into),
            created_at: glizzy.created_at,
            updated_at: glizzy.updated_at,
        }
    }
}
