//! Save gating for entries.

use super::model::{Entry, EntryStatus};
use crate::errors::ValidationError;

fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |s| s.trim().is_empty())
}

/// Checks that a candidate entry may be committed.
///
/// A savable entry has a non-blank title, a body when it is a blog or at
/// least one media item otherwise, and either a place or both location and
/// country text. Saves may only produce drafts or published entries.
pub fn validate_entry(entry: &Entry) -> Result<(), ValidationError> {
    if entry.status == EntryStatus::Trashed {
        return Err(ValidationError::InvalidStatus(entry.status.to_string()));
    }

    if entry.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if entry.entry_type.is_text() {
        if entry.body.trim().is_empty() {
            return Err(ValidationError::MissingBody);
        }
    } else if entry.media_urls.iter().all(|url| url.trim().is_empty()) {
        return Err(ValidationError::MissingMedia {
            entry_type: entry.entry_type.to_string(),
        });
    }

    let has_text_location =
        !is_blank(entry.location.as_deref()) && !is_blank(entry.country.as_deref());
    if entry.place_id.is_none() && !has_text_location {
        return Err(ValidationError::MissingLocation);
    }

    Ok(())
}
