/*!
# Travelog

Travelog is a travel journal kept in memory: places on a map, journal entries
(blog posts, photo albums, videos) attached to them, drafts, and a trash with
a retention window before entries disappear for good.

## Core Features

- Browse, search and sort places; each place shows live published and draft counts
- Create and edit entries, tagged with a place directly or by location and country text
- Save entries as drafts or publish them
- Move entries to the trash, restore them as drafts, or delete them permanently
- Start from built-in sample data or a JSON snapshot, and export the current state

## Architecture

- `journal_core`: Pure state engine (records, lifecycle, place resolver, counters, navigation)
- `session`: The owned state of one run; every mutation goes through it
- `ops`: Interactive shell, one-shot commands and text rendering
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `prompt`: Confirmation prompts for destructive operations
- `seed`: Built-in data and JSON snapshots
- `errors`: Error handling infrastructure

## Usage Example

```rust
use travelog::journal_core::{EntryPatch, EntryStatus};
use travelog::Session;

fn main() -> travelog::AppResult<()> {
    let mut session = Session::default();
    session.select_place("1")?;
    session.start_create(Some("1"));

    let entry = session.save_from_editor(
        EntryPatch {
            title: Some("Croissants".to_string()),
            body: Some("Best breakfast of the trip.".to_string()),
            status: Some(EntryStatus::Published),
            ..Default::default()
        },
        chrono::Utc::now(),
    )?;

    assert_eq!(entry.place_id.as_deref(), Some("1"));
    assert_eq!(session.place("1")?.entry_count, 3);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Pure journal state engine
pub mod journal_core;
/// Shell, one-shot commands and rendering
pub mod ops;
/// Confirmation prompts
pub mod prompt;
/// Built-in data and snapshots
pub mod seed;
/// Owned application state
pub mod session;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use seed::Snapshot;
pub use session::Session;
