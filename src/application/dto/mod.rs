pub mod emoji;
pub mod glizzy;
pub mod pagination;

pub use emoji::EmojiDto;
pub use glizzy::GlizzyDto;
pub use pagination::{Page, PageMeta};
