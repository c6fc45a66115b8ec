//! Entry state transitions.
//!
//! Every function here returns a new value and leaves its input untouched.
//! Callers must run [`recompute`](super::aggregate::recompute) over the
//! updated entry collection before reading place counters again;
//! [`Session`](crate::session::Session) does this for every mutation.

use super::model::{Entry, EntryPatch, EntryStatus};
use super::queries;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

/// Generates a fresh, unique identifier for entries and places.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Builds the entry produced by a save.
///
/// Without an `existing` entry a new one is created with a fresh id and
/// `created_at = updated_at = now`; its status is `draft` unless the patch
/// says otherwise. With an `existing` entry the patch is merged over a copy:
/// `id` and `created_at` are kept, `updated_at` becomes `now`, and `place_id`
/// is replaced only when `resolved_place_id` is `Some`.
///
/// The resulting status is exactly the patched status. `deleted_at` is
/// carried over untouched; only [`restore`] takes an entry out of the trash.
pub fn create_or_update(
    existing: Option<&Entry>,
    patch: &EntryPatch,
    resolved_place_id: Option<String>,
    now: DateTime<Utc>,
) -> Entry {
    let mut entry = match existing {
        Some(existing) => {
            let mut entry = existing.clone();
            if resolved_place_id.is_some() {
                entry.place_id = resolved_place_id;
            }
            entry
        }
        None => Entry {
            id: new_id(),
            place_id: resolved_place_id,
            location: None,
            country: None,
            entry_type: Default::default(),
            title: String::new(),
            body: String::new(),
            media_urls: Vec::new(),
            status: EntryStatus::Draft,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        },
    };

    if let Some(title) = &patch.title {
        entry.title = title.clone();
    }
    if let Some(body) = &patch.body {
        entry.body = body.clone();
    }
    if let Some(media_urls) = &patch.media_urls {
        entry.media_urls = media_urls.clone();
    }
    if let Some(entry_type) = patch.entry_type {
        entry.entry_type = entry_type;
    }
    if let Some(status) = patch.status {
        entry.status = status;
    }
    if let Some(location) = &patch.location {
        entry.location = Some(location.clone());
    }
    if let Some(country) = &patch.country {
        entry.country = Some(country.clone());
    }
    entry.updated_at = now;
    entry
}

/// Moves an entry to the trash, stamping `deleted_at`.
///
/// An entry that is already trashed is returned unchanged so its retention
/// window does not restart.
pub fn soft_delete(entry: &Entry, now: DateTime<Utc>) -> Entry {
    if entry.is_trashed() {
        debug!("Entry {} is already trashed; keeping deleted_at", entry.id);
        return entry.clone();
    }
    Entry {
        status: EntryStatus::Trashed,
        deleted_at: Some(now),
        ..entry.clone()
    }
}

/// Brings a trashed entry back as a draft and clears `deleted_at`.
///
/// Restored entries are always drafts, even if they were published before
/// they were trashed. Entries that are not trashed are returned unchanged.
pub fn restore(entry: &Entry) -> Entry {
    if !entry.is_trashed() {
        debug!("Entry {} is not trashed; nothing to restore", entry.id);
        return entry.clone();
    }
    Entry {
        status: EntryStatus::Draft,
        deleted_at: None,
        ..entry.clone()
    }
}

/// Removes the entry with `entry_id` from the collection.
///
/// A missing id is treated as already removed.
pub fn permanent_delete(entries: &[Entry], entry_id: &str) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.id != entry_id)
        .cloned()
        .collect()
}

/// Removes trashed entries whose retention window has run out.
pub fn purge_expired(entries: &[Entry], now: DateTime<Utc>, retention: Duration) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| !queries::is_expired(entry, now, retention))
        .cloned()
        .collect()
}
