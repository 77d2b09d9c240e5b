// src/domain/catalog/media.rs
use chrono::{DateTime, Timelike, Utc};

/// Storage path for an uploaded glizzy image: the original filename is
/// discarded apart from its extension (lowercased), replaced by a
/// `YYYYMMDDHHMMSS` stamp plus the millisecond component. The directory
/// carries the record's display name, never its slug.
pub fn glizzy_image_path(name: &str, filename: &str, now: DateTime<Utc>) -> String {
    let lowered = filename.to_lowercase();
    let extension = lowered
        .rfind('.')
        .map(|idx| &lowered[idx..])
        .unwrap_or_default();
    let milliseconds = now.nanosecond() / 1_000_000;

    format!(
        "images/glizzy/{name}/{}{milliseconds}{extension}",
        now.format("%Y%m%d%H%M%S")
    )
}
