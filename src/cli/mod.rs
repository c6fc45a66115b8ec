//! Command-line parsing.
//!
//! [`CliArgs`] parses the process arguments. [`ShellLine`] parses one line
//! typed into the interactive shell, using the same `clap` derive machinery
//! with the binary name switched off.

use crate::constants::{APP_DESCRIPTION, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::journal_core::{EntryPatch, EntryStatus, EntryType, SortMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A travel journal for places, entries, drafts and trash
#[derive(Parser, Debug)]
#[command(name = "travelog", about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Start from this JSON snapshot instead of the built-in data
    #[arg(short = 's', long, global = true)]
    pub seed: Option<PathBuf>,

    /// Confirm deletions without prompting
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot commands. Without a command the interactive shell starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive shell
    Shell,
    /// List places
    Places(PlaceListArgs),
    /// List drafts
    Drafts,
    /// List the trash with days until permanent deletion
    Trash,
    /// Show one entry
    Show {
        /// Entry id
        id: String,
    },
    /// Print the current places and entries as JSON
    Export,
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceListArgs {
    /// Only places whose name, region or country code contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Ordering: recent, alphabet or most-entries
    #[arg(long, default_value_t = SortMode::Recent)]
    pub sort: SortMode,
}

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(
    name = "travelog",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Go to the home view
    Home,
    /// Browse places
    Places(PlaceListArgs),
    /// Show places with their coordinates
    Map,
    /// Open a place
    Place {
        /// Place id
        id: String,
    },
    /// Browse drafts
    Drafts,
    /// Browse the trash
    Trash,
    /// Open an entry
    Show {
        /// Entry id
        id: String,
    },
    /// Start a new entry, optionally at a place
    New {
        /// Place id to preselect
        #[arg(long)]
        place: Option<String>,
    },
    /// Edit an existing entry
    Edit {
        /// Entry id
        id: String,
    },
    /// Save the entry being edited
    Save(SaveArgs),
    /// Move an entry to the trash
    Delete {
        /// Entry id
        id: String,
    },
    /// Restore a trashed entry as a draft
    Restore {
        /// Entry id
        id: String,
    },
    /// Delete an entry permanently
    Purge {
        /// Entry id
        id: String,
    },
    /// Permanently delete trashed entries past the retention window
    PurgeExpired,
    /// Go back
    Back,
    /// Show the navigation state
    Status,
    /// List the countries offered for entries
    Countries,
    /// Print the current places and entries as JSON
    Export,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Fields of a save. Anything left out keeps the edited entry's value.
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub body: Option<String>,

    /// Media URL; repeat for several
    #[arg(long = "media")]
    pub media: Option<Vec<String>>,

    /// blog, album or video
    #[arg(long = "type")]
    pub entry_type: Option<EntryType>,

    /// draft or published
    #[arg(long)]
    pub status: Option<EntryStatus>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Place id to tag the entry with
    #[arg(long)]
    pub place: Option<String>,
}

impl From<SaveArgs> for EntryPatch {
    fn from(args: SaveArgs) -> Self {
        EntryPatch {
            title: args.title,
            body: args.body,
            media_urls: args.media,
            entry_type: args.entry_type,
            status: args.status,
            location: args.location,
            country: args.country,
            place_id: args.place,
        }
    }
}

/// Splits a shell line into words.
///
/// Whitespace separates words; single or double quotes group them, and a
/// backslash escapes the next character outside single quotes.
///
/// # Errors
///
/// Returns a message when a quote is left open.
///
/// # Examples
///
/// ```
/// use travelog::cli::split_words;
///
/// let words = split_words(r#"save --title "Night in Rome" --body 'It rained'"#).unwrap();
/// assert_eq!(words, vec!["save", "--title", "Night in Rome", "--body", "It rained"]);
/// ```
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('\''), _) => current.push(c),
            (Some('"'), '"') => quote = None,
            (_, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                in_word = true;
            }
            (Some(_), _) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, _) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
