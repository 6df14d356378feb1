//! oasmith — ordered command-replay engine for API description documents.
//!
//! A raw JSON document (OpenAPI 3.x, Swagger 2, AsyncAPI) is loaded into
//! an in-memory tree, a batch of serialized edit commands is unmarshalled
//! and applied left to right, and the final tree is serialized back out
//! as stable pretty JSON. Replay is fail-fast: the first unmarshalling or
//! execution error stops the batch at that index, and effects already
//! applied are kept (atomicity per command, not per batch).
//!
//! # Example
//!
//! ```
//! use oasmith::replay::ReplayEngine;
//! use oasmith::logger::NullLogger;
//!
//! let engine = ReplayEngine::with_logger(NullLogger);
//! let batch = vec![
//!     r#"{"kind":"addPath","path":"/pets"}"#.to_string(),
//!     r#"{"kind":"addOperation","path":"/pets","method":"get"}"#.to_string(),
//! ];
//! let out = engine
//!     .execute_commands(r#"{"openapi":"3.0.0","paths":{}}"#, &batch)
//!     .unwrap();
//! assert!(out.contains("\"get\""));
//! ```

pub mod codec;
pub mod command;
pub mod history;
pub mod logger;
pub mod replay;

pub use codec::{known_kinds, marshall, unmarshall, WireError, REGISTRY_VERSION};
pub use command::{Applied, Command, CommandError, Method};
pub use history::CommandHistory;
pub use logger::{CommandLogger, NullLogger, TracingLogger};
pub use replay::{
    BatchFailure, ExecuteError, Replay, ReplayEngine, ReplayError, ReplayStatus,
};
