//! Screen and selection state that follows lifecycle operations.
//!
//! Nothing here renders anything. A front end reads [`Navigation`] to decide
//! which view to show and which records to highlight.

use super::model::{Entry, EntryStatus, Place};
use super::queries::find_place;
use std::fmt;

/// The views of the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Places,
    Map,
    PlaceDetail,
    EntryEditor,
    Drafts,
    EntryDetail,
    Trash,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Screen::Home => "home",
            Screen::Places => "places",
            Screen::Map => "map",
            Screen::PlaceDetail => "place-detail",
            Screen::EntryEditor => "entry-editor",
            Screen::Drafts => "drafts",
            Screen::EntryDetail => "entry-detail",
            Screen::Trash => "trash",
        })
    }
}

/// Current screen plus the selected and edited records, by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    pub screen: Screen,
    pub selected_place: Option<String>,
    pub selected_entry: Option<String>,
    /// The entry open in the editor; `None` on the editor means a new entry.
    pub editing_entry: Option<String>,
}

impl Navigation {
    pub fn home() -> Self {
        Self::default()
    }

    /// Jumps to a top-level view, clearing every selection.
    pub fn go_to(screen: Screen) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    /// Where a save lands.
    ///
    /// Published entries open on their detail view. Drafts, and any entry
    /// tagged with a place, land on the place's detail view. Unplaced drafts
    /// go home.
    pub fn after_save(&self, entry: &Entry) -> Self {
        if entry.status == EntryStatus::Published {
            return Self {
                screen: Screen::EntryDetail,
                selected_place: entry.place_id.clone(),
                selected_entry: Some(entry.id.clone()),
                editing_entry: None,
            };
        }
        match &entry.place_id {
            Some(place_id) => Self {
                screen: Screen::PlaceDetail,
                selected_place: Some(place_id.clone()),
                selected_entry: None,
                editing_entry: None,
            },
            None => Self::home(),
        }
    }

    /// Where moving an entry to the trash lands: its place, if that still
    /// resolves, otherwise home.
    pub fn after_soft_delete(&self, entry: &Entry, places: &[Place]) -> Self {
        match entry
            .place_id
            .as_deref()
            .and_then(|place_id| find_place(places, place_id))
        {
            Some(place) => Self {
                screen: Screen::PlaceDetail,
                selected_place: Some(place.id.clone()),
                selected_entry: None,
                editing_entry: None,
            },
            None => Self::home(),
        }
    }

    /// Restoring stays on the current view.
    pub fn after_restore(&self) -> Self {
        self.clone()
    }

    /// Permanent deletion stays on the current view.
    pub fn after_permanent_delete(&self) -> Self {
        self.clone()
    }

    /// Opens the editor for a new entry, preselecting `place_id` when it
    /// names an existing place.
    pub fn start_create(&self, place_id: Option<&str>, places: &[Place]) -> Self {
        let selected_place = match place_id.and_then(|id| find_place(places, id)) {
            Some(place) => Some(place.id.clone()),
            None => self.selected_place.clone(),
        };
        Self {
            screen: Screen::EntryEditor,
            selected_place,
            selected_entry: self.selected_entry.clone(),
            editing_entry: None,
        }
    }

    pub fn start_edit(&self, entry: &Entry) -> Self {
        Self {
            screen: Screen::EntryEditor,
            editing_entry: Some(entry.id.clone()),
            ..self.clone()
        }
    }

    pub fn view_entry(&self, entry: &Entry) -> Self {
        Self {
            screen: Screen::EntryDetail,
            selected_entry: Some(entry.id.clone()),
            ..self.clone()
        }
    }

    pub fn select_place(&self, place: &Place) -> Self {
        Self {
            screen: Screen::PlaceDetail,
            selected_place: Some(place.id.clone()),
            ..self.clone()
        }
    }

    /// One step back from the current view.
    pub fn back(&self) -> Self {
        match self.screen {
            Screen::Places | Screen::Map | Screen::Drafts | Screen::Trash | Screen::Home => Self {
                screen: Screen::Home,
                ..self.clone()
            },
            Screen::PlaceDetail => Self {
                screen: Screen::Places,
                selected_place: None,
                ..self.clone()
            },
            Screen::EntryEditor => Self {
                screen: self.place_or_home(),
                editing_entry: None,
                ..self.clone()
            },
            Screen::EntryDetail => Self {
                screen: self.place_or_home(),
                selected_entry: None,
                ..self.clone()
            },
        }
    }

    fn place_or_home(&self) -> Screen {
        if self.selected_place.is_some() {
            Screen::PlaceDetail
        } else {
            Screen::Home
        }
    }
}
