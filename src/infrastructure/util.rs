// src/infrastructure/util.rs
use crate::application::ports::util::{Slugifier, TokenGenerator};
use rand::Rng;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Uniform sampling with replacement over lowercase letters and digits.
#[derive(Default, Clone)]
pub struct AlphanumericTokenGenerator;

impl TokenGenerator for AlphanumericTokenGenerator {
    fn token(&self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}
