// src/application/commands/emojis.rs
use std::sync::Arc;

use crate::application::dto::EmojiDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::catalog::messages::{self, Field, Violation};
use crate::domain::catalog::{
    EmojiGlyph, EmojiRepository, EmojiUpdate, EntityName, NewEmoji, Slug, SlugProbe, SlugService,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateEmojiCommand {
    pub emoji: String,
    pub name: String,
    /// Caller-supplied slug candidate; derived from the name when absent.
    pub slug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateEmojiCommand {
    pub emoji: Option<String>,
    pub name: Option<String>,
}

pub struct EmojiCommandService {
    repo: Arc<dyn EmojiRepository>,
    slug_probe: Arc<dyn SlugProbe>,
    slugs: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl EmojiCommandService {
    pub fn new(
        repo: Arc<dyn EmojiRepository>,
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

    pub async fn create(&self, command: CreateEmojiCommand) -> ApplicationResult<EmojiDto> {
        let glyph = EmojiGlyph::new(command.emoji)?;
        let name = EntityName::new(command.name)?;
        let candidate = command.slug.map(Slug::new).transpose()?;

        let slug = self
            .slugs
            .generate_unique(self.slug_probe.as_ref(), &name, candidate)
            .await?;

        let now = self.clock.now();
        let emoji = self
            .repo
            .insert(NewEmoji {
                uuid: Uuid::new_v4(),
                glyph,
                name,
                slug,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(slug = %emoji.slug, "emoji created");
        Ok(emoji.into())
    }

    pub async fn update(
        &self,
        slug: String,
        command: UpdateEmojiCommand,
    ) -> ApplicationResult<EmojiDto> {
        let slug = Slug::new(slug)?;
        let mut update = EmojiUpdate::new(slug, self.clock.now());

        if let Some(glyph) = command.emoji {
            update = update.with_glyph(EmojiGlyph::new(glyph)?);
        }
        if let Some(name) = command.name {
            update = update.with_name(EntityName::new(name)?);
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
        tracing::info!(slug = %slug, "emoji deleted");
        Ok(())
    }
}
