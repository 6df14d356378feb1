//! The injected logging collaborator.
//!
//! The replay engine reports progress through a [`CommandLogger`] handed
//! to it at construction rather than through any ambient global. Every
//! method is infallible and must never panic; a logger that drops
//! messages on the floor is a valid implementation.

/// Logging seam between the engine and its host.
pub trait CommandLogger {
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn trace(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

impl<L: CommandLogger + ?Sized> CommandLogger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn trace(&self, message: &str) {
        (**self).trace(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Routes engine messages to the `tracing` macros. The default logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl CommandLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "oasmith::replay", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "oasmith::replay", "{message}");
    }

    fn trace(&self, message: &str) {
        tracing::trace!(target: "oasmith::replay", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "oasmith::replay", "{message}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl CommandLogger for NullLogger {}
