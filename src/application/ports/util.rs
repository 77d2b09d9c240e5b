// src/application/ports/util.rs

/// Length used when a token is requested without an explicit size.
pub const DEFAULT_TOKEN_LEN: usize = 10;

pub trait Slugifier: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Fixed-length random strings over a lowercase-alphanumeric alphabet.
/// No uniqueness guarantee; that is always the caller's job.
pub trait TokenGenerator: Send + Sync {
    fn token(&self, len: usize) -> String;
}
