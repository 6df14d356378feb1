//! `oasmith-replay` — replay a command batch against an API description.
//!
//! Usage:
//!   oasmith-replay '<json array of wire commands>'
//!
//! The document is read from stdin; the final document is written to
//! stdout as stable pretty JSON. Batch elements may be wire command
//! strings or inline wire objects. On failure the partial result is
//! discarded and the failing index is reported on stderr.

use std::io::{self, Read, Write};

use serde_json::Value;

use oasmith::replay::{ExecuteError, ReplayEngine};

fn parse_batch(arg: &str) -> Result<Vec<String>, String> {
    let value: Value =
        serde_json::from_str(arg).map_err(|e| format!("batch is not valid JSON: {e}"))?;
    let items = value
        .as_array()
        .ok_or_else(|| "batch must be a JSON array".to_string())?;
    items
        .iter()
        .map(|item| match item {
            Value::String(wire) => Ok(wire.clone()),
            Value::Object(_) => Ok(item.to_string()),
            other => Err(format!("batch element must be a string or object: {other}")),
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let batch_arg = match args.get(1) {
        Some(arg) => arg.clone(),
        None => {
            eprintln!("First argument must be a JSON array of wire commands.");
            std::process::exit(1);
        }
    };
    let batch = match parse_batch(&batch_arg) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut raw = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut raw) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match ReplayEngine::new().execute_commands(raw.trim(), &batch) {
        Ok(result) => {
            io::stdout().write_all(result.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(ExecuteError::Parse(e)) => {
            eprintln!("document did not parse: {e}");
            std::process::exit(1);
        }
        Err(e @ ExecuteError::Batch { .. }) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
