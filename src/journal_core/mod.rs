//! Core journal functionality without I/O operations.
//!
//! This module contains the pure state engine behind the journal: the place
//! and entry records, the lifecycle transitions applied on save, delete,
//! restore and purge, the place resolver, the per-place aggregate counters,
//! save validation, and the navigation directive that follows each
//! operation. Every function takes its inputs by reference and returns new
//! values; ownership of the live collections sits with
//! [`Session`](crate::session::Session).

pub mod aggregate;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod queries;
pub mod resolver;
pub mod validation;

pub use aggregate::recompute;
pub use model::{Entry, EntryPatch, EntryStatus, EntryType, Place};
pub use navigation::{Navigation, Screen};
pub use queries::{SortMode, Totals};
pub use resolver::{resolve, Resolution};
