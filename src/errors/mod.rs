//! Error handling utilities for the travelog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Reasons a save is blocked before anything is committed.
///
/// These mirror the save-enablement gating of the entry editor: an entry is
/// only savable when it has a title, the content its type calls for, and a
/// location reference.
///
/// # Examples
///
/// ```
/// use travelog::errors::ValidationError;
///
/// let error = ValidationError::MissingBody;
/// assert!(format!("{}", error).contains("body"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title is empty or only whitespace.
    #[error("An entry needs a title")]
    EmptyTitle,

    /// A blog entry without body text.
    #[error("A blog entry needs a body")]
    MissingBody,

    /// An album or video entry without any media.
    #[error("An {entry_type} entry needs at least one media item")]
    MissingMedia {
        /// The entry type that requires media
        entry_type: String,
    },

    /// Neither a tagged place nor both location and country text.
    #[error("An entry needs a place, or both a location and a country")]
    MissingLocation,

    /// Saves may only produce drafts or published entries.
    #[error("Entries cannot be saved with status '{0}'; use delete to trash an entry")]
    InvalidStatus(String),
}

/// Represents lookup failures and misuse of the journal session.
///
/// # Examples
///
/// ```
/// use travelog::errors::JournalError;
///
/// let error = JournalError::EntryNotFound("42".to_string());
/// assert_eq!(format!("{}", error), "Entry not found: 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// No entry with the given id exists in the collection.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// No place with the given id exists in the collection.
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Trashed entries are read-only until restored.
    #[error("Entry {0} is in the trash; restore it before editing")]
    EntryInTrash(String),

    /// Two places or two entries share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A save was requested while the editor is not open.
    #[error("Nothing to save: open the editor with 'new' or 'edit' first")]
    NothingToSave,
}

/// Represents all possible errors that can occur in the travelog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use travelog::errors::AppError;
///
/// let error = AppError::Config("Retention must be positive".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Retention must be positive");
/// ```
///
/// Converting from an IO error:
/// ```
/// use travelog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Seed files that are not valid journal JSON.
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    /// Lookup failures and session misuse.
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// A save that was blocked by validation.
    #[error("Cannot save entry: {0}")]
    Validation(#[from] ValidationError),

    /// A shell line that could not be parsed into a command.
    #[error("{0}")]
    Cli(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use travelog::errors::{AppResult, JournalError};
///
/// fn might_fail(found: bool) -> AppResult<&'static str> {
///     if !found {
///         return Err(JournalError::EntryNotFound("7".to_string()).into());
///     }
///     Ok("found")
/// }
/// assert!(might_fail(false).is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;
