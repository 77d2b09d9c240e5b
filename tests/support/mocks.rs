// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use glizzy_api::application::ports::time::Clock;
use glizzy_api::domain::catalog::{
    Emoji, EmojiId, EmojiRepository, EmojiUpdate, Glizzy, GlizzyId, GlizzyRepository,
    GlizzyUpdate, NewEmoji, NewGlizzy, Slug, SlugProbe,
};
use glizzy_api::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// Deterministic clock for tests that assert on derived paths or timestamps.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new_years_day() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct InMemoryEmojiRepo {
    rows: Mutex<Vec<Emoji>>,
    next_id: AtomicI64,
}

impl InMemoryEmojiRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl SlugProbe for InMemoryEmojiRepo {
    async fn exists_by_slug(&self, slug: &Slug) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|e| e.slug == *slug))
    }
}

#[async_trait]
impl EmojiRepository for InMemoryEmojiRepo {
    async fn insert(&self, emoji: NewEmoji) -> DomainResult<Emoji> {
        let mut rows = self.rows.lock().unwrap();
        // Mirror the table's unique constraints.
        if rows.iter().any(|e| e.slug == emoji.slug) {
            return Err(DomainError::Conflict("The slug already exists.".into()));
        }
        if rows.iter().any(|e| e.name == emoji.name) {
            return Err(DomainError::Conflict("The name already exists.".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Emoji {
            id: EmojiId::new(id)?,
            uuid: emoji.uuid,
            glyph: emoji.glyph,
            name: emoji.name,
            slug: emoji.slug,
            created_at: emoji.created_at,
            updated_at: emoji.updated_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: EmojiUpdate) -> DomainResult<Option<Emoji>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|e| e.slug == update.slug) else {
            return Ok(None);
        };
        if let Some(glyph) = update.glyph {
            row.glyph = glyph;
        }
        if let Some(name) = update.name {
            row.name = name;
        }
        row.updated_at = update.updated_at;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.slug != *slug);
        Ok(rows.len() < before)
    }

    async fn find_by_id(&self, id: EmojiId) -> DomainResult<Option<Emoji>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Emoji>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.slug == *slug)
            .cloned())
    }

    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<(Vec<Emoji>, u64)> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        let count = rows.len() as u64;
        let page = rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, count))
    }
}

pub struct InMemoryGlizzyRepo {
    rows: Mutex<Vec<Glizzy>>,
    next_id: AtomicI64,
}

impl InMemoryGlizzyRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl SlugProbe for InMemoryGlizzyRepo {
    async fn exists_by_slug(&self, slug: &Slug) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|g| g.slug == *slug))
    }
}

#[async_trait]
impl GlizzyRepository for InMemoryGlizzyRepo {
    async fn insert(&self, glizzy: NewGlizzy) -> DomainResult<Glizzy> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|g| g.slug == glizzy.slug) {
            return Err(DomainError::Conflict("The slug already exists.".into()));
        }
        if rows.iter().any(|g| g.name == glizzy.name) {
            return Err(DomainError::Conflict("The name already exists.".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Glizzy {
            id: GlizzyId::new(id)?,
            uuid: glizzy.uuid,
            name: glizzy.name,
            slug: glizzy.slug,
            short_info: glizzy.short_info,
            long_info: glizzy.long_info,
            image: glizzy.image,
            created_at: glizzy.created_at,
            updated_at: glizzy.updated_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: GlizzyUpdate) -> DomainResult<Option<Glizzy>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|g| g.slug == update.slug) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(short_info) = update.short_info {
            row.short_info = short_info;
        }
        if let Some(long_info) = update.long_info {
            row.long_info = long_info;
        }
        if let Some(image) = update.image {
            row.image = Some(image);
        }
        row.updated_at = update.updated_at;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|g| g.slug != *slug);
        Ok(rows.len() < before)
    }

    async fn find_by_id(&self, id: GlizzyId) -> DomainResult<Option<Glizzy>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Glizzy>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.slug == *slug)
            .cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Glizzy>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(rows)
    }

    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<(Vec<Glizzy>, u64)> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        let count = rows.len() as u64;
        let page = rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, count))
    }
}
