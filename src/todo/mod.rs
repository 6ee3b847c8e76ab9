//! Controller layer for a single-list todo application.
//!
//! The controller sits between a persistence component and a presentation
//! component: it turns view events into store calls and store results into
//! render instructions. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
