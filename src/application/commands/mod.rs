pub mod emojis;
pub mod glizzys;

pub use emojis::{CreateEmojiCommand, EmojiCommandService, UpdateEmojiCommand};
pub use glizzys::{CreateGlizzyCommand, GlizzyCommandService, UpdateGlizzyCommand};
