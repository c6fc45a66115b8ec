//! Plain-text views of a session.
//!
//! Each function writes one view to any `Write` sink so the shell, the
//! one-shot commands and tests share the same output.

use crate::errors::AppResult;
use crate::journal_core::{Entry, EntryType, Place, Screen};
use crate::session::Session;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Writes the view the session's navigation currently points at.
pub fn current_view<W: Write>(out: &mut W, session: &Session, now: DateTime<Utc>) -> AppResult<()> {
    let navigation = session.navigation();
    match navigation.screen {
        Screen::Home => home(out, session),
        Screen::Places => places(out, &session.places().iter().collect::<Vec<_>>()),
        Screen::Map => map(out, session.places()),
        Screen::Drafts => drafts(out, session),
        Screen::Trash => trash(out, session, now),
        Screen::PlaceDetail => match navigation.selected_place.as_deref() {
            Some(place_id) => place_detail(out, session, place_id),
            None => home(out, session),
        },
        Screen::EntryDetail => match navigation.selected_entry.as_deref() {
            Some(entry_id) => entry_detail(out, session, session.entry(entry_id)?),
            None => home(out, session),
        },
        Screen::EntryEditor => editor(out, session),
    }
}

pub fn home<W: Write>(out: &mut W, session: &Session) -> AppResult<()> {
    let totals = session.totals();
    writeln!(out, "== Home ==")?;
    writeln!(out, "  places     {}", session.places().len())?;
    writeln!(out, "  published  {}", totals.published)?;
    writeln!(out, "  drafts     {}", totals.drafts)?;
    writeln!(out, "  trash      {}", totals.trashed)?;
    Ok(())
}

pub fn places<W: Write>(out: &mut W, places: &[&Place]) -> AppResult<()> {
    writeln!(out, "== Places ==")?;
    if places.is_empty() {
        writeln!(out, "  No places found")?;
    }
    for place in places {
        write!(
            out,
            "  [{}] {} ({}, {})  {} entries",
            place.id, place.name, place.admin_area, place.country_code, place.entry_count
        )?;
        if place.draft_count > 0 {
            write!(out, "  {} drafts", place.draft_count)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn map<W: Write>(out: &mut W, places: &[Place]) -> AppResult<()> {
    writeln!(out, "== Map ==")?;
    for place in places {
        writeln!(
            out,
            "  [{}] {:>9.4} {:>10.4}  {}",
            place.id, place.lat, place.lon, place.name
        )?;
    }
    Ok(())
}

pub fn place_detail<W: Write>(out: &mut W, session: &Session, place_id: &str) -> AppResult<()> {
    let place = session.place(place_id)?;
    writeln!(out, "== {} ==", place.name)?;
    writeln!(out, "  {}, {}", place.admin_area, place.country_code)?;
    writeln!(
        out,
        "  {} published, {} drafts",
        place.entry_count, place.draft_count
    )?;
    let entries = session.place_entries(place_id);
    if entries.is_empty() {
        writeln!(out, "  No entries yet")?;
    }
    for entry in entries {
        entry_line(out, entry)?;
    }
    Ok(())
}

pub fn entry_detail<W: Write>(out: &mut W, session: &Session, entry: &Entry) -> AppResult<()> {
    writeln!(out, "== {} ==", entry.title)?;
    writeln!(
        out,
        "  [{}] {} · {} · {}",
        entry.id,
        entry.entry_type,
        entry.status,
        session.place_label(entry)
    )?;
    writeln!(out, "  created {}", entry.created_at.format("%Y-%m-%d %H:%M"))?;
    writeln!(out, "  updated {}", entry.updated_at.format("%Y-%m-%d %H:%M"))?;
    if let Some(deleted_at) = entry.deleted_at {
        writeln!(out, "  deleted {}", deleted_at.format("%Y-%m-%d %H:%M"))?;
    }
    writeln!(out)?;
    match entry.entry_type {
        EntryType::Blog => writeln!(out, "{}", entry.body)?,
        EntryType::Album | EntryType::Video => {
            for url in &entry.media_urls {
                writeln!(out, "  - {}", url)?;
            }
        }
    }
    Ok(())
}

pub fn drafts<W: Write>(out: &mut W, session: &Session) -> AppResult<()> {
    writeln!(out, "== Drafts ==")?;
    let drafts = session.drafts();
    if drafts.is_empty() {
        writeln!(out, "  No drafts")?;
    }
    for entry in drafts {
        writeln!(
            out,
            "  [{}] {}  ({}, updated {})",
            entry.id,
            entry.title,
            session.place_label(entry),
            entry.updated_at.format("%Y-%m-%d")
        )?;
    }
    Ok(())
}

pub fn trash<W: Write>(out: &mut W, session: &Session, now: DateTime<Utc>) -> AppResult<()> {
    writeln!(
        out,
        "== Trash ({}-day retention) ==",
        session.retention().num_days()
    )?;
    let trashed = session.trash();
    if trashed.is_empty() {
        writeln!(out, "  Trash is empty")?;
    }
    for entry in trashed {
        let days = session.days_until_permanent_delete(entry, now);
        let remaining = if days > 0 {
            format!(
                "{} day{} until permanent deletion",
                days,
                if days == 1 { "" } else { "s" }
            )
        } else {
            "Will be permanently deleted soon".to_string()
        };
        writeln!(
            out,
            "  [{}] {}  ({})  {}",
            entry.id,
            entry.title,
            session.place_label(entry),
            remaining
        )?;
    }
    Ok(())
}

pub fn editor<W: Write>(out: &mut W, session: &Session) -> AppResult<()> {
    let navigation = session.navigation();
    match navigation.editing_entry.as_deref() {
        Some(entry_id) => writeln!(out, "== Editing entry {} ==", entry_id)?,
        None => writeln!(out, "== New entry ==")?,
    }
    if let Some(place_id) = navigation.selected_place.as_deref() {
        writeln!(out, "  place: {}", session.place(place_id)?.label())?;
    }
    writeln!(
        out,
        "  save --title <T> [--body <B> | --media <URL>...] [--type blog|album|video]"
    )?;
    writeln!(
        out,
        "       [--status draft|published] [--place <ID> | --location <L> --country <C>]"
    )?;
    Ok(())
}

pub fn status<W: Write>(out: &mut W, session: &Session) -> AppResult<()> {
    let navigation = session.navigation();
    writeln!(out, "screen: {}", navigation.screen)?;
    writeln!(
        out,
        "selected place: {}",
        navigation.selected_place.as_deref().unwrap_or("-")
    )?;
    writeln!(
        out,
        "selected entry: {}",
        navigation.selected_entry.as_deref().unwrap_or("-")
    )?;
    writeln!(
        out,
        "editing entry: {}",
        navigation.editing_entry.as_deref().unwrap_or("-")
    )?;
    Ok(())
}

fn entry_line<W: Write>(out: &mut W, entry: &Entry) -> AppResult<()> {
    writeln!(
        out,
        "  [{}] {:<6} {:<9} {}",
        entry.id, entry.entry_type, entry.status, entry.title
    )?;
    Ok(())
}
