//! Read-only views over the place and entry collections.

use super::model::{Entry, EntryStatus, Place};
use crate::constants::UNKNOWN_LOCATION_LABEL;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

/// Ordering of the places list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Collection order, which is the order places were added in.
    #[default]
    Recent,
    /// By name, ignoring case.
    Alphabet,
    /// By published entry count, highest first.
    MostEntries,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(SortMode::Recent),
            "alphabet" | "alphabetical" => Ok(SortMode::Alphabet),
            "most-entries" | "mostentries" => Ok(SortMode::MostEntries),
            other => Err(format!(
                "unknown sort mode '{}' (expected recent, alphabet or most-entries)",
                other
            )),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortMode::Recent => "recent",
            SortMode::Alphabet => "alphabet",
            SortMode::MostEntries => "most-entries",
        })
    }
}

/// Filters places by a case-insensitive search over name, admin area and
/// country code, then orders them by `sort`.
pub fn search_places<'a>(places: &'a [Place], query: &str, sort: SortMode) -> Vec<&'a Place> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<&Place> = places
        .iter()
        .filter(|place| {
            needle.is_empty()
                || place.name.to_lowercase().contains(&needle)
                || place.admin_area.to_lowercase().contains(&needle)
                || place.country_code.to_lowercase().contains(&needle)
        })
        .collect();

    match sort {
        SortMode::Recent => {}
        SortMode::Alphabet => matches.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
        SortMode::MostEntries => matches.sort_by(|a, b| b.entry_count.cmp(&a.entry_count)),
    }
    matches
}

pub fn find_place<'a>(places: &'a [Place], place_id: &str) -> Option<&'a Place> {
    places.iter().find(|place| place.id == place_id)
}

pub fn find_entry<'a>(entries: &'a [Entry], entry_id: &str) -> Option<&'a Entry> {
    entries.iter().find(|entry| entry.id == entry_id)
}

pub fn with_status(entries: &[Entry], status: EntryStatus) -> Vec<&Entry> {
    entries.iter().filter(|entry| entry.status == status).collect()
}

/// Entries shown on a place's detail view: everything referencing the place
/// except the trash.
pub fn place_entries<'a>(entries: &'a [Entry], place_id: &str) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| entry.place_id.as_deref() == Some(place_id) && !entry.is_trashed())
        .collect()
}

/// `"<name>, <admin area>"` for the entry's place, or a placeholder when the
/// entry is unplaced or its place no longer resolves.
pub fn place_label(places: &[Place], place_id: Option<&str>) -> String {
    place_id
        .and_then(|id| find_place(places, id))
        .map(Place::label)
        .unwrap_or_else(|| UNKNOWN_LOCATION_LABEL.to_string())
}

/// Whole days left before a trashed entry may be purged, rounded up and
/// floored at zero. Entries without a deletion time report the full window.
pub fn days_until_permanent_delete(entry: &Entry, now: DateTime<Utc>, retention: Duration) -> i64 {
    let Some(deleted_at) = entry.deleted_at else {
        return retention.num_days();
    };
    let remaining_ms = (retention - (now - deleted_at)).num_milliseconds();
    let day_ms = Duration::days(1).num_milliseconds();
    if remaining_ms > 0 {
        (remaining_ms + day_ms - 1) / day_ms
    } else {
        0
    }
}

/// Whether a trashed entry has outlived the retention window.
pub fn is_expired(entry: &Entry, now: DateTime<Utc>, retention: Duration) -> bool {
    entry.is_trashed()
        && entry
            .deleted_at
            .is_some_and(|deleted_at| now - deleted_at >= retention)
}

/// Entry totals by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub drafts: usize,
    pub published: usize,
    pub trashed: usize,
}

impl Totals {
    pub fn all(&self) -> usize {
        self.drafts + self.published + self.trashed
    }
}

pub fn totals(entries: &[Entry]) -> Totals {
    entries.iter().fold(Totals::default(), |mut totals, entry| {
        match entry.status {
            EntryStatus::Draft => totals.drafts += 1,
            EntryStatus::Published => totals.published += 1,
            EntryStatus::Trashed => totals.trashed += 1,
        }
        totals
    })
}
