// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_emoji;
mod postgres_glizzy;

pub use error::map_sqlx;
pub use postgres_emoji::PostgresEmojiRepository;
pub use postgres_glizzy::PostgresGlizzyRepository;
