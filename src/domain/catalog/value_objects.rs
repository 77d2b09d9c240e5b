// src/domain/catalog/value_objects.rs
use crate::domain::catalog::messages::{self, Field, Violation};
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmojiId(pub i64);

impl EmojiId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("emoji id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EmojiId> for i64 {
    fn from(value: EmojiId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlizzyId(pub i64);

impl GlizzyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("glizzy id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<GlizzyId> for i64 {
    fn from(value: GlizzyId) -> Self {
        value.0
    }
}

/// Display name of a catalog record, capped at 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName(String);

impl EntityName {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                messages::message(Field::Name, Violation::Blank).into(),
            ));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(
                messages::message(Field::Name, Violation::MaxLength).into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityName> for String {
    fn from(value: EntityName) -> Self {
        value.0
    }
}

/// URL-safe identifier: lowercase ASCII alphanumerics and hyphens only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                messages::message(Field::Slug, Violation::Null).into(),
            ));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(
                messages::message(Field::Slug, Violation::MaxLength).into(),
            ));
        }
        let valid = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(DomainError::Validation(
                messages::message(Field::Slug, Violation::Invalid).into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// The emoji glyph itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiGlyph(String);

impl EmojiGlyph {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("The emoji cannot be empty.".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EmojiGlyph> for String {
    fn from(value: EmojiGlyph) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortInfo(String);

impl ShortInfo {
    pub const MAX_LENGTH: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                messages::message(Field::ShortInfo, Violation::Blank).into(),
            ));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(
                messages::message(Field::ShortInfo, Violation::MaxLength).into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ShortInfo> for String {
    fn from(value: ShortInfo) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongInfo(String);

impl LongInfo {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                messages::message(Field::LongInfo, Violation::Blank).into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<LongInfo> for String {
    fn from(value: LongInfo) -> Self {
        value.0
    }
}

/// Storage-relative media path, e.g. `images/glizzy/frank/202501011200000.png`.
/// Resolved to an absolute URL only at serving time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath(String);

impl ImagePath {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                messages::message(Field::Image, Violation::Blank).into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ImagePath> for String {
    fn from(value: ImagePath) -> Self {
        value.0
    }
}
