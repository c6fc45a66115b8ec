//! Place and entry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named geographic location that aggregates entries.
///
/// `entry_count` and `draft_count` are derived values. They are overwritten by
/// [`recompute`](super::aggregate::recompute) and never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub country_code: String,
    pub admin_area: String,
    pub locality: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub entry_count: usize,
    #[serde(default)]
    pub draft_count: usize,
}

impl Place {
    /// Display label used by entry lists, e.g. `Paris, Île-de-France`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.admin_area)
    }
}

/// The kind of content an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Markdown text in `body`.
    #[default]
    Blog,
    /// Photos in `media_urls`.
    Album,
    /// A video in `media_urls`.
    Video,
}

impl EntryType {
    /// Whether the entry's content lives in `body` rather than `media_urls`.
    pub fn is_text(self) -> bool {
        matches!(self, EntryType::Blog)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Blog => "blog",
            EntryType::Album => "album",
            EntryType::Video => "video",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" => Ok(EntryType::Blog),
            "album" => Ok(EntryType::Album),
            "video" => Ok(EntryType::Video),
            other => Err(format!(
                "unknown entry type '{}' (expected blog, album or video)",
                other
            )),
        }
    }
}

/// Where an entry is in its lifecycle.
///
/// ```text
/// draft <-> published -> trashed -> (removed)
///                trashed -> draft   (restore)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Draft,
    Published,
    Trashed,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::Draft => "draft",
            EntryStatus::Published => "published",
            EntryStatus::Trashed => "trashed",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(EntryStatus::Draft),
            "published" => Ok(EntryStatus::Published),
            "trashed" => Ok(EntryStatus::Trashed),
            other => Err(format!(
                "unknown status '{}' (expected draft, published or trashed)",
                other
            )),
        }
    }
}

/// A single journal record: a blog post, a photo album or a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    /// Weak reference to a [`Place`]; lookups may fail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Free-text location used until the entry is tagged with a place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "type", default)]
    pub entry_type: EntryType,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn is_trashed(&self) -> bool {
        self.status == EntryStatus::Trashed
    }
}

/// Fields supplied by the editor on save.
///
/// Every field is optional so the same patch shape serves both new entries
/// and edits: on an edit, `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub entry_type: Option<EntryType>,
    pub status: Option<EntryStatus>,
    pub location: Option<String>,
    pub country: Option<String>,
    /// An explicitly tagged place. Takes precedence over location text.
    pub place_id: Option<String>,
}

impl EntryPatch {
    /// Whether the patch carries any free-text location or country.
    pub fn has_location_text(&self) -> bool {
        self.location.is_some() || self.country.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_parses_case_insensitively() {
        assert_eq!("Album".parse::<EntryType>().unwrap(), EntryType::Album);
        assert_eq!(" video ".parse::<EntryType>().unwrap(), EntryType::Video);
        assert!("podcast".parse::<EntryType>().is_err());
    }

    #[test]
    fn test_status_display_round_trips_through_from_str() {
        for status in [
            EntryStatus::Draft,
            EntryStatus::Published,
            EntryStatus::Trashed,
        ] {
            assert_eq!(status.to_string().parse::<EntryStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_entry_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": "2",
            "placeId": "1",
            "location": "Louvre Museum",
            "country": "France",
            "createdAt": "2024-12-02T00:00:00Z",
            "updatedAt": "2024-12-02T00:00:00Z",
            "type": "album",
            "title": "Louvre Museum Visit",
            "mediaUrls": ["a.jpg", "b.jpg"],
            "status": "published"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.place_id.as_deref(), Some("1"));
        assert_eq!(entry.entry_type, EntryType::Album);
        assert_eq!(entry.media_urls.len(), 2);
        assert_eq!(entry.status, EntryStatus::Published);
        assert!(entry.body.is_empty());
        assert!(entry.deleted_at.is_none());
    }

    #[test]
    fn test_place_label() {
        let place = Place {
            id: "1".to_string(),
            name: "Paris".to_string(),
            country_code: "FR".to_string(),
            admin_area: "Île-de-France".to_string(),
            locality: "Paris".to_string(),
            lat: 48.8566,
            lon: 2.3522,
            thumbnail_url: None,
            entry_count: 0,
            draft_count: 0,
        };
        assert_eq!(place.label(), "Paris, Île-de-France");
    }
}
