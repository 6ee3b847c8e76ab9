//! Application services for the todo list.

mod config;
mod controller;

pub use config::ControllerConfig;
pub use controller::{TodoController, TodoControllerError, TodoControllerResult};
