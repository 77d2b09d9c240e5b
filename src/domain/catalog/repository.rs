// src/domain/catalog/repository.rs
use crate::domain::catalog::emoji::{Emoji, EmojiUpdate, NewEmoji};
use crate::domain::catalog::glizzy::{Glizzy, GlizzyUpdate, NewGlizzy};
use crate::domain::catalog::value_objects::{EmojiId, GlizzyId, Slug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Narrow capability used by the slug service: the only question it ever
/// asks a store is whether a slug is already taken.
#[async_trait]
pub trait SlugProbe: Send + Sync {
    async fn exists_by_slug(&self, slug: &Slug) -> DomainResult<bool>;
}

#[async_trait]
pub trait EmojiRepository: Send + Sync {
    async fn insert(&self, emoji: NewEmoji) -> DomainResult<Emoji>;
    async fn update(&self, update: EmojiUpdate) -> DomainResult<Option<Emoji>>;
    async fn delete(&self, slug: &Slug) -> DomainResult<bool>;
    async fn find_by_id(&self, id: EmojiId) -> DomainResult<Option<Emoji>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Emoji>>;
    /// One page ordered by name ascending, plus the total row count.
    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<(Vec<Emoji>, u64)>;
}

#[async_trait]
pub trait GlizzyRepository: Send + Sync {
    async fn insert(&self, glizzy: NewGlizzy) -> DomainResult<Glizzy>;
    async fn update(&self, update: GlizzyUpdate) -> DomainResult<Option<Glizzy>>;
    async fn delete(&self, slug: &Slug) -> DomainResult<bool>;
    async fn find_by_id(&self, id: GlizzyId) -> DomainResult<Option<Glizzy>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Glizzy>>;
    /// Every row ordered by name ascending; backing store for the GraphQL
    /// list query, which is unpaginated by design.
    async fn list_all(&self) -> DomainResult<Vec<Glizzy>>;
    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<(Vec<Glizzy>, u64)>;
}
