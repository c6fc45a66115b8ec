//! The interactive shell.
//!
//! Reads one command per line, applies it to the session and prints the view
//! navigation lands on. A failing command prints its error and the loop
//! carries on; end of input or `quit` ends it.

use crate::cli::{split_words, ShellCommand, ShellLine};
use crate::constants::COUNTRIES;
use crate::errors::{AppError, AppResult};
use crate::journal_core::Screen;
use crate::ops::render;
use crate::prompt::{AssumeYes, Confirm, TerminalConfirm};
use crate::session::Session;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Shell behaviour that does not come from the session itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Confirm deletions without prompting.
    pub assume_yes: bool,
    /// Fixed clock; `None` uses the current time for every command.
    pub now: Option<DateTime<Utc>>,
}

impl ShellOptions {
    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

/// Runs the shell until `quit` or end of input.
///
/// Confirmation prompts read their answer from the same `input` as the
/// commands, so a scripted session answers them on the following line.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the shell with an error.
pub fn run_shell<R, W>(
    session: &mut Session,
    mut input: R,
    mut output: W,
    options: &ShellOptions,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    render::current_view(&mut output, session, options.now())?;

    loop {
        write!(output, "travelog:{}> ", session.navigation().screen)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(message) => {
                writeln!(output, "Error: {}", AppError::Cli(message))?;
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(output, "{}", err)?;
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        debug!("Shell command: {:?}", command);

        let now = options.now();
        let mut buffer = Vec::new();
        let result = if options.assume_yes {
            execute(session, command, &mut AssumeYes, &mut buffer, now)
        } else {
            let mut confirm = TerminalConfirm::new(&mut input, &mut output);
            execute(session, command, &mut confirm, &mut buffer, now)
        };
        output.write_all(&buffer)?;

        if let Err(err) = result {
            warn!("Command failed: {}", err);
            writeln!(output, "Error: {}", err)?;
        }
    }

    debug!("Shell finished");
    Ok(())
}

/// Applies one shell command and writes what it shows.
pub fn execute<W: Write>(
    session: &mut Session,
    command: ShellCommand,
    confirm: &mut dyn Confirm,
    out: &mut W,
    now: DateTime<Utc>,
) -> AppResult<()> {
    match command {
        ShellCommand::Home => session.navigate(Screen::Home),
        ShellCommand::Places(args) => {
            session.navigate(Screen::Places);
            let query = args.search.unwrap_or_default();
            return render::places(out, &session.search_places(&query, args.sort));
        }
        ShellCommand::Map => session.navigate(Screen::Map),
        ShellCommand::Place { id } => session.select_place(&id)?,
        ShellCommand::Drafts => session.navigate(Screen::Drafts),
        ShellCommand::Trash => session.navigate(Screen::Trash),
        ShellCommand::Show { id } => session.view_entry(&id)?,
        ShellCommand::New { place } => session.start_create(place.as_deref()),
        ShellCommand::Edit { id } => session.start_edit(&id)?,
        ShellCommand::Save(args) => {
            let entry = session.save_from_editor(args.into(), now)?;
            writeln!(out, "Saved entry {} as {}", entry.id, entry.status)?;
        }
        ShellCommand::Delete { id } => {
            if session.entry(&id)?.is_trashed() {
                writeln!(out, "Entry {} is already in the trash", id)?;
                return Ok(());
            }
            if !session.trash_entry(&id, confirm, now)? {
                writeln!(out, "Cancelled")?;
                return Ok(());
            }
            writeln!(out, "Moved entry {} to the trash", id)?;
        }
        ShellCommand::Restore { id } => {
            let entry = session.restore_entry(&id)?;
            writeln!(out, "Restored entry {} as {}", entry.id, entry.status)?;
        }
        ShellCommand::Purge { id } => {
            if !session.purge_entry(&id, confirm)? {
                writeln!(out, "Nothing deleted")?;
                return Ok(());
            }
            writeln!(out, "Deleted entry {} permanently", id)?;
        }
        ShellCommand::PurgeExpired => {
            let removed = session.purge_expired(now);
            writeln!(out, "Removed {} expired entries from the trash", removed)?;
        }
        ShellCommand::Back => session.back(),
        ShellCommand::Status => return render::status(out, session),
        ShellCommand::Countries => {
            for country in COUNTRIES {
                writeln!(out, "{}", country)?;
            }
            return Ok(());
        }
        ShellCommand::Export => {
            writeln!(out, "{}", session.snapshot().to_json_pretty()?)?;
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
    }
    render::current_view(out, session, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    fn run(script: &str, assume_yes: bool) -> (Session, String) {
        let mut session = Session::default();
        let mut output = Vec::new();
        let options = ShellOptions {
            assume_yes,
            now: Some(Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap()),
        };
        run_shell(&mut session, Cursor::new(script.as_bytes()), &mut output, &options).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_create_and_publish_at_a_place() {
        let (session, output) = run(
            "new --place 4\nsave --title 'Blue domes' --body 'Sunset in Oia' --status published\n",
            false,
        );

        assert!(output.contains("Saved entry"));
        assert!(output.contains("== Blue domes =="));
        assert_eq!(session.navigation().screen, Screen::EntryDetail);
        assert_eq!(session.place("4").unwrap().entry_count, 1);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let (session, output) = run("delete 1\nn\nstatus\n", false);

        assert!(output.contains("Are you sure you want to delete this entry?"));
        assert!(output.contains("Cancelled"));
        assert!(session.trash().is_empty());
    }

    #[test]
    fn test_confirmed_delete_then_restore() {
        let (session, output) = run("delete 5\ny\ntrash\nrestore 5\n", false);

        assert!(output.contains("Moved entry 5 to the trash"));
        assert!(output.contains("30 days until permanent deletion"));
        assert!(output.contains("Restored entry 5 as draft"));
        assert_eq!(session.drafts().len(), 2);
    }

    #[test]
    fn test_second_delete_does_not_prompt() {
        let (session, output) = run("delete 5\ny\ntrash\ndelete 5\nstatus\n", false);

        assert_eq!(output.matches("Are you sure you want to delete this entry?").count(), 1);
        assert!(output.contains("Entry 5 is already in the trash"));
        assert!(!output.contains("Cancelled"));
        assert_eq!(session.navigation().screen, Screen::Trash);
        assert_eq!(session.trash().len(), 1);
    }

    #[test]
    fn test_edit_of_trashed_entry_is_refused() {
        let (session, output) = run("delete 5\nedit 5\n", true);

        assert!(output.contains("Error: Journal error: Entry 5 is in the trash; restore it before editing"));
        assert_ne!(session.navigation().screen, Screen::EntryEditor);
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let (session, output) = run("show 99\nsave --title x\nfly\nplace 2\n", true);

        assert!(output.contains("Error: Journal error: Entry not found: 99"));
        assert!(output.contains("Nothing to save"));
        assert!(output.contains("== Tokyo =="));
        assert_eq!(session.navigation().selected_place.as_deref(), Some("2"));
    }

    #[test]
    fn test_unterminated_quote_is_reported() {
        let (session, output) = run("new\nsave --title 'Half open\n", true);

        assert!(output.contains("Error: Unterminated quote"));
        assert_eq!(session.entries().len(), 5);
    }

    #[test]
    fn test_rejected_save_keeps_editor_open() {
        let (session, output) = run("new\nsave --title 'No place yet' --body text\n", true);

        assert!(output.contains("Cannot save entry"));
        assert_eq!(session.navigation().screen, Screen::EntryEditor);
        assert_eq!(session.entries().len(), 5);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run("quit\nplace 1\n", true);
        assert_eq!(session.navigation().screen, Screen::Home);
    }

    #[test]
    fn test_places_search_and_sort() {
        let (_, output) = run("places --search o --sort alphabet\n", true);

        let new_york = output.find("New York").unwrap();
        let tokyo = output.find("[2] Tokyo").unwrap();
        let santorini = output.find("Santorini").unwrap();
        assert!(new_york < santorini && santorini < tokyo);
        assert!(!output.contains("[1] Paris"));
    }
}
