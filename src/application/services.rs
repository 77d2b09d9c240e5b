// src/application/services.rs
use std::sync::Arc;

use crate::application::commands::{EmojiCommandService, GlizzyCommandService};
use crate::application::ports::{
    time::Clock,
    util::{Slugifier, TokenGenerator},
};
use crate::application::queries::{EmojiQueryService, GlizzyQueryService};
use crate::domain::catalog::{EmojiRepository, GlizzyRepository, SlugProbe, SlugService};

/// Service container handed to the HTTP and GraphQL layers. Each entity gets
/// its own slug probe so slug uniqueness is checked against the right table.
pub struct ApplicationServices {
    pub emoji_commands: Arc<EmojiCommandService>,
    pub emoji_queries: Arc<EmojiQueryService>,
    pub glizzy_commands: Arc<GlizzyCommandService>,
    pub glizzy_queries: Arc<GlizzyQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        emoji_repo: Arc<dyn EmojiRepository>,
        emoji_slug_probe: Arc<dyn SlugProbe>,
        glizzy_repo: Arc<dyn GlizzyRepository>,
        glizzy_slug_probe: Arc<dyn SlugProbe>,
        clock: Arc<dyn Clock>,
        slugifier: Arc<dyn Slugifier>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(Arc::clone(&slugifier), Arc::clone(&tokens)));

        let emoji_commands = Arc::new(EmojiCommandService::new(
            Arc::clone(&emoji_repo),
            emoji_slug_probe,
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let glizzy_commands = Arc::new(GlizzyCommandService::new(
            Arc::clone(&glizzy_repo),
            glizzy_slug_probe,
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let emoji_queries = Arc::new(EmojiQueryService::new(emoji_repo));
        let glizzy_queries = Arc::new(GlizzyQueryService::new(glizzy_repo));

        Self {
            emoji_commands,
            emoji_queries,
            glizzy_commands,
            glizzy_queries,
        }
    }
}
