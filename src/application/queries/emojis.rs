// src/application/queries/emojis.rs
use std::sync::Arc;

use crate::application::dto::{EmojiDto, Page};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::catalog::messages::{self, Field, Violation};
use crate::domain::catalog::{EmojiRepository, Slug};

const DEFAULT_PER_PAGE: u32 = 20;
const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone)]
pub struct ListEmojisQuery {
    pub page: u32,
    pub per_page: u32,
}

pub struct EmojiQueryService {
    repo: Arc<dyn EmojiRepository>,
}

impl EmojiQueryService {
    pub fn new(repo: Arc<dyn EmojiRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: ListEmojisQuery) -> ApplicationResult<Page<EmojiDto>> {
        let page = query.page.max(1);
        let per_page = if query.per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            query.per_page.min(MAX_PER_PAGE)
        };
        let offset = (page - 1) * per_page;

        let (records, count) = self.repo.list_page(per_page, offset).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, count, page, per_page))
    }

    pub async fn get_by_slug(&self, slug: String) -> ApplicationResult<EmojiDto> {
        let slug = Slug::new(slug)?;
        let emoji = self.repo.find_by_slug(&slug).await?.ok_or_else(|| {
            ApplicationError::not_found(messages::message(Field::Slug, Violation::DoesNotExist))
        })?;
        Ok(emoji.into())
    }
}
