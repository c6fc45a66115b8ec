//! Constants used throughout the application.
//!
//! This module contains all constants used in the travelog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "travelog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A travel journal for places, entries, drafts and trash";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable pointing at a JSON seed file.
pub const ENV_VAR_SEED_FILE: &str = "TRAVELOG_SEED_FILE";
/// Environment variable overriding the trash retention window in days.
pub const ENV_VAR_RETENTION_DAYS: &str = "TRAVELOG_RETENTION_DAYS";
/// Environment variable selecting the log format (`text` or `json`).
pub const ENV_VAR_LOG_FORMAT: &str = "TRAVELOG_LOG_FORMAT";
/// Environment variable that answers every confirmation with "confirm".
pub const ENV_VAR_ASSUME_YES: &str = "TRAVELOG_ASSUME_YES";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Trash
/// Number of days a trashed entry is kept before it may be purged.
pub const DEFAULT_TRASH_RETENTION_DAYS: i64 = 30;
/// Longest accepted retention window, one hundred years.
pub const MAX_TRASH_RETENTION_DAYS: i64 = 36_500;

// Confirmation copy
/// Title of the confirmation shown before moving an entry to the trash.
pub const CONFIRM_TRASH_TITLE: &str = "Delete entry";
/// Message of the confirmation shown before moving an entry to the trash.
pub const CONFIRM_TRASH_MESSAGE: &str = "Are you sure you want to delete this entry?";
/// Title of the confirmation shown before permanently deleting an entry.
pub const CONFIRM_PURGE_TITLE: &str = "Delete permanently";
/// Message of the confirmation shown before permanently deleting an entry.
pub const CONFIRM_PURGE_MESSAGE: &str = "This cannot be undone.";
/// Label of the destructive choice in both confirmations.
pub const CONFIRM_DELETE_LABEL: &str = "Delete";
/// Label of the cancelling choice in both confirmations.
pub const CONFIRM_CANCEL_LABEL: &str = "Cancel";

// Display
/// Label shown for entries whose place cannot be resolved.
pub const UNKNOWN_LOCATION_LABEL: &str = "Unknown location";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "travelog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

/// Countries offered by the entry editor's country picker.
pub const COUNTRIES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Argentina", "Armenia", "Australia",
    "Austria", "Azerbaijan", "Bahrain", "Bangladesh", "Belarus", "Belgium",
    "Bolivia", "Bosnia and Herzegovina", "Brazil", "Bulgaria", "Cambodia",
    "Canada", "Chile", "China", "Colombia", "Croatia", "Czech Republic",
    "Denmark", "Egypt", "Estonia", "Finland", "France", "Georgia", "Germany",
    "Ghana", "Greece", "Hungary", "Iceland", "India", "Indonesia", "Iran",
    "Iraq", "Ireland", "Israel", "Italy", "Japan", "Jordan", "Kazakhstan",
    "Kenya", "Kuwait", "Latvia", "Lebanon", "Lithuania", "Luxembourg",
    "Malaysia", "Mexico", "Morocco", "Netherlands", "New Zealand", "Norway",
    "Pakistan", "Philippines", "Poland", "Portugal", "Qatar", "Romania",
    "Russia", "Saudi Arabia", "Singapore", "Slovakia", "Slovenia", "South Africa",
    "South Korea", "Spain", "Sri Lanka", "Sweden", "Switzerland", "Thailand",
    "Turkey", "Ukraine", "United Arab Emirates", "United Kingdom", "United States",
    "Uruguay", "Venezuela", "Vietnam",
];
