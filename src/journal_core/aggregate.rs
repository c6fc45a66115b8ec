//! Per-place published and draft counters.

use super::model::{Entry, EntryStatus, Place};
use std::collections::HashMap;

/// Recomputes `entry_count` and `draft_count` for every place.
///
/// Published entries referencing a place count towards `entry_count`, drafts
/// towards `draft_count`. Trashed entries and entries without a place count
/// towards nothing. All other place fields are returned unchanged, and the
/// function is idempotent: counts depend only on `entries`.
///
/// # Examples
///
/// ```
/// use travelog::journal_core::aggregate::recompute;
/// use travelog::seed;
///
/// let places = recompute(&seed::places(), &seed::entries());
/// let paris = places.iter().find(|p| p.id == "1").unwrap();
/// assert_eq!(paris.entry_count, 2);
/// assert_eq!(paris.draft_count, 1);
/// ```
pub fn recompute(places: &[Place], entries: &[Entry]) -> Vec<Place> {
    let mut tallies: HashMap<&str, (usize, usize)> = HashMap::new();
    for entry in entries {
        let Some(place_id) = entry.place_id.as_deref() else {
            continue;
        };
        let tally = tallies.entry(place_id).or_default();
        match entry.status {
            EntryStatus::Published => tally.0 += 1,
            EntryStatus::Draft => tally.1 += 1,
            EntryStatus::Trashed => {}
        }
    }

    places
        .iter()
        .map(|place| {
            let (published, drafts) = tallies.get(place.id.as_str()).copied().unwrap_or_default();
            Place {
                entry_count: published,
                draft_count: drafts,
                ..place.clone()
            }
        })
        .collect()
}
