//! The replay engine.
//!
//! Applies an ordered batch of serialized commands to a document, left to
//! right, stopping at the first unmarshalling or execution failure. The
//! batch is never pre-validated as a whole: a command may target a node
//! an earlier command in the same batch created, so out-of-context
//! validation would reject valid batches. Failure keeps everything
//! already applied (atomicity per command, not per batch) and reports the
//! failing index; there is no rollback and no retry.

use thiserror::Error;

use oasmith_document::{Document, DocumentError};

use crate::codec::{unmarshall, WireError};
use crate::command::CommandError;
use crate::logger::{CommandLogger, TracingLogger};

// ── Errors ────────────────────────────────────────────────────────────────

/// Why one batch element failed.
#[derive(Debug, Error, PartialEq)]
pub enum ReplayError {
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// A batch that stopped at `index`.
#[derive(Debug, Error, PartialEq)]
#[error("command {n} of {length} failed: {error}", n = .index + 1)]
pub struct BatchFailure {
    /// Zero-based index of the failing element.
    pub index: usize,
    /// Batch length, for reporting.
    pub length: usize,
    pub error: ReplayError,
}

/// Failure of the full load → replay → serialize pipeline.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The raw document could not be loaded; nothing was applied.
    #[error(transparent)]
    Parse(#[from] DocumentError),
    /// The batch failed mid-way. `partial` is the document as mutated by
    /// the commands before the failing index; callers may inspect it but
    /// must not present it as a successful result.
    #[error("{failure}")]
    Batch {
        failure: BatchFailure,
        partial: Box<Document>,
    },
}

// ── Replay session ────────────────────────────────────────────────────────

/// Where a replay session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    /// Nothing applied yet.
    Ready,
    /// The element at this index is next to apply.
    Applying(usize),
    /// Every element applied; terminal.
    Done,
    /// Stopped at this index; terminal.
    Failed(usize),
}

impl ReplayStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReplayStatus::Done | ReplayStatus::Failed(_))
    }
}

/// A step-wise replay over one document and one batch.
///
/// Owns the `&mut` document for its lifetime, so exactly one session can
/// mutate a given document at a time. Hosts that apply commands
/// incrementally (an editor driving undo/redo) call [`Replay::step`];
/// everyone else uses [`ReplayEngine::replay`].
pub struct Replay<'a, L: CommandLogger> {
    document: &'a mut Document,
    batch: &'a [String],
    cursor: usize,
    status: ReplayStatus,
    logger: &'a L,
}

impl<'a, L: CommandLogger> Replay<'a, L> {
    fn new(document: &'a mut Document, batch: &'a [String], logger: &'a L) -> Self {
        Self {
            document,
            batch,
            cursor: 0,
            status: ReplayStatus::Ready,
            logger,
        }
    }

    pub fn status(&self) -> ReplayStatus {
        self.status
    }

    /// How many elements have been applied so far.
    pub fn applied(&self) -> usize {
        self.cursor
    }

    /// Unmarshalls and applies the next batch element.
    ///
    /// A terminal session is left untouched and reports its status.
    pub fn step(&mut self) -> Result<ReplayStatus, BatchFailure> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        let index = self.cursor;
        if index >= self.batch.len() {
            self.status = ReplayStatus::Done;
            return Ok(self.status);
        }
        self.status = ReplayStatus::Applying(index);

        let command = match unmarshall(&self.batch[index]) {
            Ok(command) => command,
            Err(error) => return Err(self.fail(index, error.into())),
        };
        self.logger.info(&format!(
            "applying {} ({}/{}): {}",
            command.kind(),
            index + 1,
            self.batch.len(),
            command.summary()
        ));
        match command.execute(&mut *self.document) {
            Ok(applied) => {
                if applied.displaced.is_some() {
                    self.logger.trace(&format!("{} displaced a prior value", command.kind()));
                }
            }
            Err(error) => return Err(self.fail(index, error.into())),
        }

        self.cursor += 1;
        self.status = if self.cursor == self.batch.len() {
            ReplayStatus::Done
        } else {
            ReplayStatus::Applying(self.cursor)
        };
        Ok(self.status)
    }

    /// Drives the session to a terminal state.
    pub fn finish(mut self) -> Result<usize, BatchFailure> {
        loop {
            match self.step() {
                Ok(status) if status.is_terminal() => return Ok(self.cursor),
                Ok(_) => {}
                Err(failure) => return Err(failure),
            }
        }
    }

    fn fail(&mut self, index: usize, error: ReplayError) -> BatchFailure {
        self.status = ReplayStatus::Failed(index);
        self.logger.error(&format!(
            "command {} of {} failed: {error}",
            index + 1,
            self.batch.len()
        ));
        BatchFailure {
            index,
            length: self.batch.len(),
            error,
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────

/// Replays command batches against documents.
///
/// The engine itself is stateless apart from its logger; independent
/// replays over distinct documents may run in parallel. One document must
/// never be driven by two in-flight replays.
pub struct ReplayEngine<L: CommandLogger = TracingLogger> {
    logger: L,
}

impl ReplayEngine<TracingLogger> {
    pub fn new() -> Self {
        Self { logger: TracingLogger }
    }
}

impl Default for ReplayEngine<TracingLogger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: CommandLogger> ReplayEngine<L> {
    pub fn with_logger(logger: L) -> Self {
        Self { logger }
    }

    /// Opens a step-wise session over `document` and `batch`.
    pub fn begin<'a>(&'a self, document: &'a mut Document, batch: &'a [String]) -> Replay<'a, L> {
        Replay::new(document, batch, &self.logger)
    }

    /// Applies the whole batch, returning how many commands ran.
    ///
    /// On failure the document keeps the effects of every command before
    /// the failing index; the caller still holds it through the `&mut`.
    pub fn replay(
        &self,
        document: &mut Document,
        batch: &[String],
    ) -> Result<usize, BatchFailure> {
        self.logger
            .debug(&format!("replaying batch of {} command(s)", batch.len()));
        self.begin(document, batch).finish()
    }

    /// The full pipeline: load the raw document, replay the batch, and
    /// serialize the result as stable pretty JSON.
    pub fn execute_commands(
        &self,
        raw: &str,
        batch: &[String],
    ) -> Result<String, ExecuteError> {
        let mut document = Document::parse(raw)?;
        match self.replay(&mut document, batch) {
            Ok(_) => Ok(document.to_pretty_json()),
            Err(failure) => Err(ExecuteError::Batch {
                failure,
                partial: Box::new(document),
            }),
        }
    }
}

/// One-shot convenience over [`ReplayEngine::execute_commands`] with the
/// default logger.
pub fn execute_commands(raw: &str, batch: &[String]) -> Result<String, ExecuteError> {
    ReplayEngine::new().execute_commands(raw, batch)
}
