//! Editor-side command history.
//!
//! Executes commands against a document while recording their inverses,
//! so the host can walk backwards and forwards through the edit stream.
//! Single-writer only; collaborative reconciliation lives outside this
//! crate and feeds the replay engine finished batches instead.

use oasmith_document::Document;

use crate::command::{Command, CommandError};

struct HistoryEntry {
    command: Command,
    inverse: Option<Command>,
}

/// An undo/redo stack over executed commands.
#[derive(Default)]
pub struct CommandHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.last().is_some_and(|e| e.inverse.is_some())
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Executes `command` and records it. A fresh edit invalidates any
    /// redo tail.
    pub fn execute(
        &mut self,
        document: &mut Document,
        command: Command,
    ) -> Result<(), CommandError> {
        let applied = command.execute(document)?;
        let inverse = command.inverse(&applied);
        self.undo_stack.push(HistoryEntry { command, inverse });
        self.redo_stack.clear();
        Ok(())
    }

    /// Reverses the most recent command.
    ///
    /// Returns `false` when there is nothing to undo or the top command
    /// has no clean inverse; the document is untouched in either case.
    pub fn undo(&mut self, document: &mut Document) -> Result<bool, CommandError> {
        let entry = match self.undo_stack.pop() {
            Some(entry) => entry,
            None => return Ok(false),
        };
        let inverse = match &entry.inverse {
            Some(inverse) => inverse.clone(),
            None => {
                self.undo_stack.push(entry);
                return Ok(false);
            }
        };
        if let Err(error) = inverse.execute(document) {
            self.undo_stack.push(entry);
            return Err(error);
        }
        self.redo_stack.push(entry);
        Ok(true)
    }

    /// Re-applies the most recently undone command.
    pub fn redo(&mut self, document: &mut Document) -> Result<bool, CommandError> {
        let entry = match self.redo_stack.pop() {
            Some(entry) => entry,
            None => return Ok(false),
        };
        match entry.command.execute(document) {
            Ok(applied) => {
                let inverse = entry.command.inverse(&applied);
                self.undo_stack.push(HistoryEntry {
                    command: entry.command,
                    inverse,
                });
                Ok(true)
            }
            Err(error) => {
                self.redo_stack.push(entry);
                Err(error)
            }
        }
    }

    /// Seals the history at a commit point; nothing before it can be
    /// undone or redone afterwards.
    pub fn finalize(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
