//! Drives the todo controller from JSON lines on standard input.
//!
//! Usage:
//!
//! ```text
//! todo_console < session.jsonl
//! ```
//!
//! Each input line is either a route change or a view event:
//!
//! ```json
//! {"route": "#/active"}
//! {"event": "newTodo", "payload": "buy milk"}
//! {"event": "itemToggle", "payload": {"id": 1, "completed": true}}
//! {"event": "removeCompleted"}
//! ```
//!
//! Every render instruction is written to standard output as one JSON line
//! of the form `{"instruction": "<name>", "payload": ...}`. Logs go to
//! standard error and honour `RUST_LOG`. Todos live in memory for the
//! duration of the session.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use todo_controller::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::RenderInstruction,
    ports::{PresenterError, PresenterResult, TodoPresenter},
    services::{ControllerConfig, TodoController, TodoControllerError},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Initial route when the session starts.
const INITIAL_ROUTE: &str = "#/";

/// Errors that end a console session.
#[derive(Debug, Error)]
enum ConsoleError {
    #[error("failed to read standard input: {0}")]
    Input(#[from] std::io::Error),
    #[error(transparent)]
    Controller(#[from] TodoControllerError),
}

/// One line of console input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConsoleCommand {
    Route {
        route: String,
    },
    Event {
        event: String,
        #[serde(default)]
        payload: Value,
    },
}

/// Presenter writing each instruction as a JSON line.
#[derive(Debug)]
struct JsonLinesPresenter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesPresenter<W> {
    const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

#[async_trait]
impl<W: Write + Send> TodoPresenter for JsonLinesPresenter<W> {
    async fn render(&self, instruction: RenderInstruction) -> PresenterResult<()> {
        let line = serde_json::to_string(&instruction).map_err(PresenterError::unavailable)?;
        let mut out = self
            .out
            .lock()
            .map_err(|err| PresenterError::unavailable(std::io::Error::other(err.to_string())))?;
        writeln!(out, "{line}").map_err(PresenterError::unavailable)?;
        out.flush().map_err(PresenterError::unavailable)?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), ConsoleError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let controller = TodoController::with_config(
        Arc::new(InMemoryTodoStore::new()),
        Arc::new(JsonLinesPresenter::new(std::io::stdout())),
        ControllerConfig::original(),
    );
    controller.activate(INITIAL_ROUTE).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match serde_json::from_str::<ConsoleCommand>(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!(error = %err, "skipping unreadable console line");
                continue;
            }
        };
        let outcome = match command {
            ConsoleCommand::Route { route } => controller.activate(&route).await,
            ConsoleCommand::Event { event, payload } => {
                controller.handle_wire(&event, payload).await
            }
        };
        if let Err(err) = outcome {
            warn!(error = %err, "console command failed");
        }
    }
    Ok(())
}
