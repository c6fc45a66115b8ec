//! User-facing operations over a journal session.
//!
//! This module provides the interactive shell, the one-shot commands and the
//! text views both of them print.

pub mod commands;
pub mod render;
pub mod shell;

// Re-export commonly used functions
pub use commands::run_command;
pub use shell::{run_shell, ShellOptions};
