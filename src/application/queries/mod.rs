pub mod emojis;
pub mod glizzys;

pub use emojis::{EmojiQueryService, ListEmojisQuery};
pub use glizzys::{GlizzyFilter, GlizzyQueryService, ListGlizzysQuery};
