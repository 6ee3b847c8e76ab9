//! Domain model for the single-list todo controller.
//!
//! Todos, the route-derived filter, and the message contract between the
//! controller and the view: inbound [`ViewEvent`]s and outbound
//! [`RenderInstruction`]s. Nothing here touches storage or rendering.

mod edit;
mod error;
mod event;
mod filter;
mod ids;
mod render;
mod todo;

pub use edit::EditState;
pub use error::{TodoDomainError, ViewEventError};
pub use event::ViewEvent;
pub use filter::Filter;
pub use ids::{TodoId, TodoTitle};
pub use render::RenderInstruction;
pub use todo::{PersistedTodoData, Todo, TodoChanges, TodoCounts, TodoQuery};
