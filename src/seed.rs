//! Seed data the journal starts from.
//!
//! Nothing is persisted: every start begins from the built-in dataset below,
//! or from a JSON seed file with the same layout as `travelog export`.

use crate::errors::{AppResult, JournalError};
use crate::journal_core::{Entry, EntryStatus, EntryType, Place};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The place and entry collections as one serializable value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Snapshot {
    /// The built-in dataset.
    pub fn builtin() -> Self {
        Self {
            places: places(),
            entries: entries(),
        }
    }

    /// Reads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file cannot be read, `AppError::Seed`
    /// if it is not a valid snapshot and `JournalError::DuplicateId` if two
    /// places or two entries share an id.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        debug!("Reading seed file {:?}", path);
        let raw = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        snapshot.check_unique_ids()?;
        info!(
            "Loaded {} places and {} entries from seed file",
            snapshot.places.len(),
            snapshot.entries.len()
        );
        Ok(snapshot)
    }

    /// Ids are lookup keys, so each must occur once per collection.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::DuplicateId` naming the first repeated id.
    pub fn check_unique_ids(&self) -> Result<(), JournalError> {
        first_duplicate(self.places.iter().map(|p| p.id.as_str())).map_or(Ok(()), |id| {
            Err(JournalError::DuplicateId {
                kind: "place",
                id: id.to_string(),
            })
        })?;
        first_duplicate(self.entries.iter().map(|e| e.id.as_str())).map_or(Ok(()), |id| {
            Err(JournalError::DuplicateId {
                kind: "entry",
                id: id.to_string(),
            })
        })
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn place(
    id: &str,
    name: &str,
    country_code: &str,
    admin_area: &str,
    locality: &str,
    (lat, lon): (f64, f64),
    thumbnail_url: &str,
    (entry_count, draft_count): (usize, usize),
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        country_code: country_code.to_string(),
        admin_area: admin_area.to_string(),
        locality: locality.to_string(),
        lat,
        lon,
        thumbnail_url: Some(thumbnail_url.to_string()),
        entry_count,
        draft_count,
    }
}

/// Built-in places. Their counters are display values and are replaced by
/// live counts as soon as a session recomputes them.
pub fn places() -> Vec<Place> {
    vec![
        place(
            "1",
            "Paris",
            "FR",
            "Île-de-France",
            "Paris",
            (48.8566, 2.3522),
            "https://images.unsplash.com/photo-1502602898536-47ad22581b52?w=300&h=200&fit=crop",
            (5, 2),
        ),
        place(
            "2",
            "Tokyo",
            "JP",
            "Tokyo",
            "Shibuya",
            (35.6762, 139.6503),
            "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=300&h=200&fit=crop",
            (3, 1),
        ),
        place(
            "3",
            "New York",
            "US",
            "New York",
            "Manhattan",
            (40.7128, -74.0060),
            "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=300&h=200&fit=crop",
            (7, 0),
        ),
        place(
            "4",
            "Santorini",
            "GR",
            "South Aegean",
            "Oia",
            (36.4618, 25.3753),
            "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?w=300&h=200&fit=crop",
            (2, 1),
        ),
    ]
}

struct SeedEntry<'a> {
    id: &'a str,
    place_id: &'a str,
    location: &'a str,
    country: &'a str,
    created: (i32, u32, u32),
    entry_type: EntryType,
    title: &'a str,
    body: &'a str,
    media_urls: &'a [&'a str],
    status: EntryStatus,
}

impl SeedEntry<'_> {
    fn build(self) -> Entry {
        let (year, month, d) = self.created;
        let created_at = day(year, month, d);
        Entry {
            id: self.id.to_string(),
            place_id: Some(self.place_id.to_string()),
            location: Some(self.location.to_string()),
            country: Some(self.country.to_string()),
            entry_type: self.entry_type,
            title: self.title.to_string(),
            body: self.body.to_string(),
            media_urls: self.media_urls.iter().map(|url| url.to_string()).collect(),
            status: self.status,
            created_at,
            updated_at: created_at,
            deleted_at: None,
        }
    }
}

/// Built-in entries.
pub fn entries() -> Vec<Entry> {
    vec![
        SeedEntry {
            id: "1",
            place_id: "1",
            location: "Eiffel Tower area",
            country: "France",
            created: (2024, 12, 1),
            entry_type: EntryType::Blog,
            title: "First Day in Paris",
            body: "# Amazing Start\n\nParis welcomed us with open arms! The Eiffel Tower looks even more magnificent in person.",
            media_urls: &[],
            status: EntryStatus::Published,
        }
        .build(),
        SeedEntry {
            id: "2",
            place_id: "1",
            location: "Louvre Museum",
            country: "France",
            created: (2024, 12, 2),
            entry_type: EntryType::Album,
            title: "Louvre Museum Visit",
            body: "",
            media_urls: &[
                "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=400&h=300&fit=crop",
                "https://images.unsplash.com/photo-1566139006694-05d32ea7a65b?w=400&h=300&fit=crop",
            ],
            status: EntryStatus::Published,
        }
        .build(),
        SeedEntry {
            id: "3",
            place_id: "1",
            location: "Seine River",
            country: "France",
            created: (2024, 12, 3),
            entry_type: EntryType::Blog,
            title: "Draft: Seine River Walk",
            body: "# Beautiful Evening\n\nWalking along the Seine at sunset...",
            media_urls: &[],
            status: EntryStatus::Draft,
        }
        .build(),
        SeedEntry {
            id: "4",
            place_id: "2",
            location: "Shibuya Crossing",
            country: "Japan",
            created: (2024, 11, 15),
            entry_type: EntryType::Video,
            title: "Shibuya Crossing Rush",
            body: "",
            media_urls: &["https://player.vimeo.com/video/example"],
            status: EntryStatus::Published,
        }
        .build(),
        SeedEntry {
            id: "5",
            place_id: "3",
            location: "Central Park",
            country: "United States",
            created: (2024, 10, 20),
            entry_type: EntryType::Blog,
            title: "Central Park Morning",
            body: "# Peaceful Start\n\nMorning jog through Central Park was exactly what I needed.",
            media_urls: &[],
            status: EntryStatus::Published,
        }
        .build(),
    ]
}
