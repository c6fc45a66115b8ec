//! The owned application state of one journal run.
//!
//! [`Session`] holds the place and entry collections and the navigation
//! state, and is the only place they change. Every mutation goes through one
//! of its methods, and each of those recomputes the place counters before it
//! returns, so counters read from a session are always current.

use crate::constants::{COUNTRIES, DEFAULT_TRASH_RETENTION_DAYS};
use crate::errors::{AppResult, JournalError};
use crate::journal_core::{
    lifecycle, queries, recompute, resolve, validation, Entry, EntryPatch, EntryStatus,
    Navigation, Place, Screen, SortMode, Totals,
};
use crate::prompt::{Confirm, ConfirmPrompt};
use crate::seed::Snapshot;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

/// One user's journal: collections, navigation and trash policy.
#[derive(Debug, Clone)]
pub struct Session {
    places: Vec<Place>,
    entries: Vec<Entry>,
    navigation: Navigation,
    retention: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Snapshot::builtin(), Duration::days(DEFAULT_TRASH_RETENTION_DAYS))
    }
}

impl Session {
    /// Starts a session on the home view with counters recomputed from
    /// `snapshot`'s entries.
    pub fn new(snapshot: Snapshot, retention: Duration) -> Self {
        let Snapshot { places, entries } = snapshot;
        let places = recompute(&places, &entries);
        debug!(
            "Session started with {} places and {} entries",
            places.len(),
            entries.len()
        );
        Self {
            places,
            entries,
            navigation: Navigation::home(),
            retention,
        }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    pub fn totals(&self) -> Totals {
        queries::totals(&self.entries)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            places: self.places.clone(),
            entries: self.entries.clone(),
        }
    }

    /// Looks up a place by id.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::PlaceNotFound` for unknown ids.
    pub fn place(&self, place_id: &str) -> AppResult<&Place> {
        queries::find_place(&self.places, place_id)
            .ok_or_else(|| JournalError::PlaceNotFound(place_id.to_string()).into())
    }

    /// Looks up an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::EntryNotFound` for unknown ids.
    pub fn entry(&self, entry_id: &str) -> AppResult<&Entry> {
        queries::find_entry(&self.entries, entry_id)
            .ok_or_else(|| JournalError::EntryNotFound(entry_id.to_string()).into())
    }

    pub fn drafts(&self) -> Vec<&Entry> {
        queries::with_status(&self.entries, EntryStatus::Draft)
    }

    pub fn trash(&self) -> Vec<&Entry> {
        queries::with_status(&self.entries, EntryStatus::Trashed)
    }

    /// Live (non-trashed) entries of a place.
    pub fn place_entries(&self, place_id: &str) -> Vec<&Entry> {
        queries::place_entries(&self.entries, place_id)
    }

    pub fn search_places(&self, query: &str, sort: SortMode) -> Vec<&Place> {
        queries::search_places(&self.places, query, sort)
    }

    pub fn place_label(&self, entry: &Entry) -> String {
        queries::place_label(&self.places, entry.place_id.as_deref())
    }

    pub fn days_until_permanent_delete(&self, entry: &Entry, now: DateTime<Utc>) -> i64 {
        queries::days_until_permanent_delete(entry, now, self.retention)
    }

    /// Switches to a top-level view, clearing selections.
    pub fn navigate(&mut self, screen: Screen) {
        self.navigation = Navigation::go_to(screen);
    }

    pub fn select_place(&mut self, place_id: &str) -> AppResult<()> {
        let place = self.place(place_id)?;
        self.navigation = self.navigation.select_place(place);
        Ok(())
    }

    pub fn view_entry(&mut self, entry_id: &str) -> AppResult<()> {
        let entry = self.entry(entry_id)?;
        self.navigation = self.navigation.view_entry(entry);
        Ok(())
    }

    /// Opens the editor for a new entry.
    pub fn start_create(&mut self, place_id: Option<&str>) {
        self.navigation = self.navigation.start_create(place_id, &self.places);
    }

    /// Opens the editor on an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::EntryNotFound` for unknown ids and
    /// `JournalError::EntryInTrash` for trashed entries.
    pub fn start_edit(&mut self, entry_id: &str) -> AppResult<()> {
        let entry = self.entry(entry_id)?;
        if entry.is_trashed() {
            return Err(JournalError::EntryInTrash(entry_id.to_string()).into());
        }
        self.navigation = self.navigation.start_edit(entry);
        Ok(())
    }

    pub fn back(&mut self) {
        self.navigation = self.navigation.back();
    }

    /// Saves the editor's contents: the entry being edited, or a new entry.
    ///
    /// A new entry started from a place is tagged with that place unless the
    /// patch names a place or location text of its own.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::NothingToSave` when the editor is not open, and
    /// otherwise whatever [`save_entry`](Self::save_entry) returns.
    pub fn save_from_editor(
        &mut self,
        mut patch: EntryPatch,
        now: DateTime<Utc>,
    ) -> AppResult<Entry> {
        if self.navigation.screen != Screen::EntryEditor {
            return Err(JournalError::NothingToSave.into());
        }
        let editing = self.navigation.editing_entry.clone();
        if editing.is_none() && patch.place_id.is_none() && !patch.has_location_text() {
            patch.place_id = self.navigation.selected_place.clone();
        }
        self.save_entry(editing.as_deref(), patch, now)
    }

    /// Creates (`existing_id = None`) or updates an entry.
    ///
    /// The place is resolved from the patch first: an explicit place id wins,
    /// then location and country text. On an edit whose patch carries neither,
    /// the entry keeps its place. The merged entry is validated before
    /// anything is committed, so a rejected save leaves no implicitly created
    /// place behind. Counters are recomputed and navigation follows the save.
    ///
    /// # Errors
    ///
    /// - `JournalError::EntryNotFound` if `existing_id` is unknown
    /// - `JournalError::EntryInTrash` if `existing_id` names a trashed entry
    /// - `JournalError::PlaceNotFound` if the patch names an unknown place
    /// - `AppError::Validation` if the merged entry is not savable
    pub fn save_entry(
        &mut self,
        existing_id: Option<&str>,
        patch: EntryPatch,
        now: DateTime<Utc>,
    ) -> AppResult<Entry> {
        let existing = match existing_id {
            Some(entry_id) => Some(self.entry(entry_id)?.clone()),
            None => None,
        };
        if let Some(entry) = existing.as_ref().filter(|e| e.is_trashed()) {
            return Err(JournalError::EntryInTrash(entry.id.clone()).into());
        }
        if let Some(place_id) = patch.place_id.as_deref() {
            self.place(place_id)?;
        }

        let explicit_place_id = match (&patch.place_id, &existing) {
            (Some(place_id), _) => Some(place_id.clone()),
            (None, Some(existing)) if !patch.has_location_text() => existing.place_id.clone(),
            _ => None,
        };
        let location = patch
            .location
            .clone()
            .or_else(|| existing.as_ref().and_then(|e| e.location.clone()));
        let country = patch
            .country
            .clone()
            .or_else(|| existing.as_ref().and_then(|e| e.country.clone()));
        if let Some(country) = country.as_deref() {
            if !COUNTRIES.contains(&country.trim()) {
                debug!("Country '{}' is not in the picker list", country);
            }
        }

        let resolution = resolve(
            &self.places,
            location.as_deref(),
            country.as_deref(),
            explicit_place_id.as_deref(),
        );
        let entry = lifecycle::create_or_update(
            existing.as_ref(),
            &patch,
            resolution.place_id.clone(),
            now,
        );
        validation::validate_entry(&entry)?;

        self.places = resolution.places;
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => *slot = entry.clone(),
            None => self.entries.push(entry.clone()),
        }
        self.refresh_counts();
        self.navigation = self.navigation.after_save(&entry);

        info!(
            "Saved {} entry {} as {}",
            if existing.is_some() { "existing" } else { "new" },
            entry.id,
            entry.status
        );
        Ok(entry)
    }

    /// Moves an entry to the trash once the user confirms.
    ///
    /// Returns `Ok(false)` when the user cancels; nothing changes then. An
    /// entry that is already in the trash is left alone without prompting, so
    /// its original deletion time and the current view are kept.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::EntryNotFound` for unknown ids, before prompting.
    pub fn trash_entry<C>(
        &mut self,
        entry_id: &str,
        confirm: &mut C,
        now: DateTime<Utc>,
    ) -> AppResult<bool>
    where
        C: Confirm + ?Sized,
    {
        let current = self.entry(entry_id)?.clone();
        if current.is_trashed() {
            debug!("Entry {} is already in the trash", entry_id);
            return Ok(false);
        }
        if !confirm.confirm(&ConfirmPrompt::TRASH)? {
            debug!("Trashing entry {} cancelled", entry_id);
            return Ok(false);
        }

        let trashed = lifecycle::soft_delete(&current, now);
        self.replace_entry(trashed.clone());
        self.refresh_counts();
        self.navigation = self.navigation.after_soft_delete(&trashed, &self.places);

        info!("Moved entry {} to the trash", entry_id);
        Ok(true)
    }

    /// Restores a trashed entry as a draft.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::EntryNotFound` for unknown ids.
    pub fn restore_entry(&mut self, entry_id: &str) -> AppResult<Entry> {
        let current = self.entry(entry_id)?.clone();
        let restored = lifecycle::restore(&current);
        self.replace_entry(restored.clone());
        self.refresh_counts();
        self.navigation = self.navigation.after_restore();

        info!("Restored entry {} as a draft", entry_id);
        Ok(restored)
    }

    /// Deletes an entry for good once the user confirms.
    ///
    /// Unknown ids are treated as already deleted: no prompt, `Ok(false)`.
    pub fn purge_entry<C>(&mut self, entry_id: &str, confirm: &mut C) -> AppResult<bool>
    where
        C: Confirm + ?Sized,
    {
        if queries::find_entry(&self.entries, entry_id).is_none() {
            debug!("Entry {} is already gone", entry_id);
            return Ok(false);
        }
        if !confirm.confirm(&ConfirmPrompt::PURGE)? {
            debug!("Permanent deletion of entry {} cancelled", entry_id);
            return Ok(false);
        }

        self.entries = lifecycle::permanent_delete(&self.entries, entry_id);
        self.refresh_counts();
        self.navigation = self.navigation.after_permanent_delete();

        info!("Permanently deleted entry {}", entry_id);
        Ok(true)
    }

    /// Permanently deletes trashed entries older than the retention window.
    /// Returns how many were removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries = lifecycle::purge_expired(&self.entries, now, self.retention);
        let removed = before - self.entries.len();
        if removed > 0 {
            self.refresh_counts();
            info!("Purged {} expired entries from the trash", removed);
        }
        removed
    }

    fn replace_entry(&mut self, entry: Entry) {
        if let Some(slot) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            *slot = entry;
        }
    }

    fn refresh_counts(&mut self) {
        self.places = recompute(&self.places, &self.entries);
    }
}
