// src/domain/catalog/mod.rs
pub mod emoji;
pub mod glizzy;
pub mod media;
pub mod messages;
pub mod repository;
pub mod slugs;
pub mod value_objects;

pub use emoji::{Emoji, EmojiUpdate, NewEmoji};
pub use glizzy::{Glizzy, GlizzyUpdate, NewGlizzy};
pub use repository::{EmojiRepository, GlizzyRepository, SlugProbe};
pub use slugs::SlugService;
pub use value_objects::{
    EmojiGlyph, EmojiId, EntityName, GlizzyId, ImagePath, LongInfo, ShortInfo, Slug,
};
