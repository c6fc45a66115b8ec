//! One-shot commands run straight from the command line.

use crate::cli::Command;
use crate::errors::AppResult;
use crate::ops::render;
use crate::session::Session;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Runs a non-interactive command against `session` and prints its output.
///
/// `Command::Shell` is handled by the caller; here it prints the home view.
pub fn run_command<W: Write>(
    session: &mut Session,
    command: &Command,
    out: &mut W,
    now: DateTime<Utc>,
) -> AppResult<()> {
    match command {
        Command::Shell => render::home(out, session),
        Command::Places(args) => {
            let query = args.search.as_deref().unwrap_or_default();
            render::places(out, &session.search_places(query, args.sort))
        }
        Command::Drafts => render::drafts(out, session),
        Command::Trash => render::trash(out, session, now),
        Command::Show { id } => {
            session.view_entry(id)?;
            render::current_view(out, session, now)
        }
        Command::Export => {
            writeln!(out, "{}", session.snapshot().to_json_pretty()?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PlaceListArgs;
    use crate::errors::{AppError, JournalError};
    use crate::journal_core::SortMode;

    fn run(command: Command) -> AppResult<String> {
        let mut session = Session::default();
        let mut out = Vec::new();
        run_command(&mut session, &command, &mut out, Utc::now())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_places_by_most_entries() {
        let output = run(Command::Places(PlaceListArgs {
            search: None,
            sort: SortMode::MostEntries,
        }))
        .unwrap();

        let paris = output.find("Paris").unwrap();
        let santorini = output.find("Santorini").unwrap();
        assert!(paris < santorini);
        assert!(output.contains("[1] Paris (Île-de-France, FR)  2 entries  1 drafts"));
    }

    #[test]
    fn test_show_unknown_entry() {
        let err = run(Command::Show { id: "9".to_string() }).unwrap_err();
        assert!(matches!(err, AppError::Journal(JournalError::EntryNotFound(_))));
    }

    #[test]
    fn test_export_carries_live_counts() {
        let output = run(Command::Export).unwrap();
        let snapshot: crate::seed::Snapshot = serde_json::from_str(&output).unwrap();

        assert_eq!(snapshot.places[0].entry_count, 2);
        assert_eq!(snapshot.entries.len(), 5);
    }
}
