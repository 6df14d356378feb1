//! The command model.
//!
//! A [`Command`] is one immutable, named edit operation against a
//! document: a kind tag plus the parameters needed to perform it. It is
//! constructed once from its wire form, applied exactly once, and
//! discarded; calling [`Command::execute`] twice on one instance is
//! undefined behavior on the caller's part.
//!
//! Node references inside a command are resolved against the live tree
//! at apply time. A batch routinely adds a path item and then targets it
//! with the very next command, so resolving earlier would reject valid
//! batches.

pub mod execute;
pub mod types;

pub use types::{Applied, Command, CommandError, Method};
