// src/application/commands/glizzys.rs
use std::sync::Arc;

use crate::application::dto::GlizzyDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::catalog::media::glizzy_image_path;
use crate::domain::catalog::messages::{self, Field, Violation};
use crate::domain::catalog::{
    EntityName, GlizzyRepository, GlizzyUpdate, ImagePath, LongInfo, NewGlizzy, ShortInfo, Slug,
    SlugProbe, SlugService,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateGlizzyCommand {
    pub name: String,
    pub short_info: String,
    pub long_info: String,
    /// Original filename of an uploaded image; the stored path is derived
    /// from it together with the entity name and the creation instant.
    pub image: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateGlizzyCommand {
    pub name: Option<String>,
    pub short_info: Option<String>,
    pub long_info: Option<String>,
    pub image: Option<String>,
}

pub struct GlizzyCommandService {
    repo: Arc<dyn GlizzyRepository>,
    slug_probe: Arc<dyn SlugProbe>,
    slugs: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl GlizzyCommandService {
    pub fn new(
        repo: Arc<dyn GlizzyRepository>,
        slug_probe: Arc<dyn SlugProbe>,
        slugs: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_probe,
            slugs,
            clock,
        }
    }

    pub async fn create(&self, command: CreateGlizzyCommand) -> ApplicationResult<GlizzyDto> {
        let name = EntityName::new(command.name)?;
        let short_info = ShortInfo::new(command.short_info)?;
        let long_info = LongInfo::new(command.long_info)?;
        let candidate = command.slug.map(Slug::new).transpose()?;

        let slug = self
            .slugs
            .generate_unique(self.slug_probe.as_ref(), &name, candidate)
            .await?;

        let now = self.clock.now();
        let image = command
            .image
            .map(|filename| ImagePath::new(glizzy_image_path(name.as_str(), &filename, now)))
            .transpose()?;

        let glizzy = self
            .repo
            .insert(NewGlizzy {
                uuid: Uuid::new_v4(),
                name,
                slug,
                short_info,
                long_info,
                image,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(slug = %glizzy.slug, "glizzy created");
        Ok(glizzy.into())
    }

    pub async fn update(
        &self,
        slug: String,
        command: UpdateGlizzyCommand,
    ) -> ApplicationResult<GlizzyDto> {
        let slug = Slug::new(slug)?;
        let now = self.clock.now();
        let mut update = GlizzyUpdate::new(slug, now);

        if let Some(name) = command.name {
            update = update.with_name(EntityName::new(name)?);
        }
        if let Some(short_info) = command.short_info {
            update = update.with_short_info(ShortInfo::new(short_info)?);
        }
        if let Some(long_info) = command.long_info {
            update = update.with_long_info(LongInfo::new(long_info)?);
        }
        if let Some(filename) = command.image {
            // The stored path carries the display name, not the slug.
            let owner = match update.name.as_ref() {
                Some(name) => name.as_str().to_string(),
                None => {
                    let current =
                        self.repo.find_by_slug(&update.slug).await?.ok_or_else(|| {
                            ApplicationError::not_found(messages::message(
                                Field::Slug,
                                Violation::DoesNotExist,
                            ))
                        })?;
                    current.name.into()
                }
            };
            update = update.with_image(ImagePath::new(glizzy_image_path(&owner, &filename, now))?);
        }

        let updated = self.repo.update(update).await?.ok_or_else(|| {
            ApplicationError::not_found(messages::message(Field::Slug, Violation::DoesNotExist))
        })?;

        Ok(updated.into())
    }

    pub async fn delete(&self, slug: String) -> ApplicationResult<()> {
        let slug = Slug::new(slug)?;
        let deleted = self.repo.delete(&slug).await?;
        if !deleted {
            return Err(ApplicationError::not_found(messages::message(
                Field::Slug,
                Violation::DoesNotExist,
            )));
        }
        tracing::info!(slug = %slug, "glizzy deleted");
        Ok(())
    }
}
