//! Confirmation prompts for destructive operations.
//!
//! Moving an entry to the trash and deleting it permanently both wait for a
//! two-choice confirmation (cancel or confirm). Declining performs no
//! mutation.

use crate::constants::{
    CONFIRM_CANCEL_LABEL, CONFIRM_DELETE_LABEL, CONFIRM_PURGE_MESSAGE, CONFIRM_PURGE_TITLE,
    CONFIRM_TRASH_MESSAGE, CONFIRM_TRASH_TITLE,
};
use crate::errors::AppResult;
use std::io::{BufRead, Write};
use tracing::debug;

/// The copy shown for a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl ConfirmPrompt {
    /// Shown before moving an entry to the trash.
    pub const TRASH: ConfirmPrompt = ConfirmPrompt {
        title: CONFIRM_TRASH_TITLE,
        message: CONFIRM_TRASH_MESSAGE,
        confirm_label: CONFIRM_DELETE_LABEL,
        cancel_label: CONFIRM_CANCEL_LABEL,
    };

    /// Shown before deleting an entry permanently.
    pub const PURGE: ConfirmPrompt = ConfirmPrompt {
        title: CONFIRM_PURGE_TITLE,
        message: CONFIRM_PURGE_MESSAGE,
        confirm_label: CONFIRM_DELETE_LABEL,
        cancel_label: CONFIRM_CANCEL_LABEL,
    };
}

/// Asks the user to confirm or cancel.
pub trait Confirm {
    /// Returns `Ok(true)` only when the user picked the confirming choice.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> AppResult<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&ConfirmPrompt) -> bool,
{
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> AppResult<bool> {
        Ok(self(prompt))
    }
}

/// Confirms every prompt without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> AppResult<bool> {
        debug!("Auto-confirming '{}'", prompt.title);
        Ok(true)
    }
}

/// Prompts on a terminal-like reader/writer pair.
///
/// Only an explicit `y`/`yes` or the confirm label confirms; an empty answer
/// or end of input cancels.
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> AppResult<bool> {
        loop {
            write!(
                self.output,
                "{}: {} [{} = y / {} = N] ",
                prompt.title, prompt.message, prompt.confirm_label, prompt.cancel_label
            )?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(false);
            }

            let answer = answer.trim().to_lowercase();
            if answer.is_empty() || answer == "n" || answer == "no" {
                return Ok(false);
            }
            if answer == "y" || answer == "yes" || answer == prompt.confirm_label.to_lowercase() {
                return Ok(true);
            }
            if answer == prompt.cancel_label.to_lowercase() {
                return Ok(false);
            }
            writeln!(self.output, "Please answer yes or no.")?;
        }
    }
}
