//! Todo controller: the decision layer of a todo-list application.
//!
//! This crate routes user-interface events to an asynchronous store and
//! turns store results into render instructions for a view. Storage and
//! rendering are supplied by the host through ports.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Todos, filters, view events and render instructions
//! - **Ports**: Abstract store and presenter traits
//! - **Adapters**: In-memory store, recording presenter and headless view
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use todo_controller::todo::{
//!     adapters::memory::{InMemoryTodoStore, RecordingPresenter},
//!     domain::{RenderInstruction, ViewEvent},
//!     services::TodoController,
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
//! let presenter = Arc::new(RecordingPresenter::new());
//! let controller = TodoController::new(Arc::new(InMemoryTodoStore::new()), presenter.clone());
//!
//! controller.activate("#/").await.ok();
//! controller
//!     .handle(ViewEvent::NewTodo { title: "buy milk".to_owned() })
//!     .await
//!     .ok();
//!
//! assert_eq!(presenter.contains(&RenderInstruction::ClearNewTodo).ok(), Some(true));
//! # })).ok();
//! ```
//!
//! # Modules
//!
//! - [`todo`]: Todo controller, its ports and in-memory adapters

pub mod todo;
