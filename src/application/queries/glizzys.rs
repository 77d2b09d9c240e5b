// src/application/queries/glizzys.rs
use std::sync::Arc;

use crate::application::dto::{GlizzyDto, Page};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::catalog::messages::{self, Field, Violation};
use crate::domain::catalog::{GlizzyId, GlizzyRepository, Slug};

const DEFAULT_PER_PAGE: u32 = 20;
const MAX_PER_PAGE: u32 = 100;

/// Error wording surfaced verbatim through the GraphQL layer.
pub const MISSING_FILTER_MESSAGE: &str = "Field 'glizzy' of either arguments of 'id' of type 'ID' or 'slug' of type 'String' are required, but it was not provided.";
pub const GLIZZY_NOT_FOUND_MESSAGE: &str = "The glizzy does not exist.";

#[derive(Debug, Clone)]
pub struct ListGlizzysQuery {
    pub page: u32,
    pub per_page: u32,
}

/// Lookup filter for the single-item query. At least one of the two fields
/// must be present; when both are, the row must match both.
#[derive(Debug, Clone, Default)]
pub struct GlizzyFilter {
    pub id: Option<i64>,
    pub slug: Option<String>,
}

pub struct GlizzyQueryService {
    repo: Arc<dyn GlizzyRepository>,
}

impl GlizzyQueryService {
    pub fn new(repo: Arc<dyn GlizzyRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: ListGlizzysQuery) -> ApplicationResult<Page<GlizzyDto>> {
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

    /// All glizzys ordered by name ascending, for the GraphQL list query.
    pub async fn list_all(&self) -> ApplicationResult<Vec<GlizzyDto>> {
        let records = self.repo.list_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_slug(&self, slug: String) -> ApplicationResult<GlizzyDto> {
        let slug = Slug::new(slug)?;
        let glizzy = self.repo.find_by_slug(&slug).await?.ok_or_else(|| {
            ApplicationError::not_found(messages::message(Field::Slug, Violation::DoesNotExist))
        })?;
        Ok(glizzy.into())
    }

    /// Single-item lookup by id and/or slug, with the GraphQL contract:
    /// neither argument is an error, no matching row is an error.
    pub async fn get_filtered(&self, filter: GlizzyFilter) -> ApplicationResult<GlizzyDto> {
        let not_found = || ApplicationError::not_found(GLIZZY_NOT_FOUND_MESSAGE);

        let glizzy = match (filter.id, filter.slug) {
            (None, None) => {
                return Err(ApplicationError::validation(MISSING_FILTER_MESSAGE));
            }
            (Some(id), slug) => {
                let id = GlizzyId::new(id).map_err(|_| not_found())?;
                let found = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
                if let Some(slug) = slug {
                    if found.slug.as_str() != slug {
                        return Err(not_found());
                    }
                }
                found
            }
            (None, Some(slug)) => {
                let slug = Slug::new(slug).map_err(|_| not_found())?;
                self.repo.find_by_slug(&slug).await?.ok_or_else(not_found)?
            }
        };

        Ok(glizzy.into())
    }
}
