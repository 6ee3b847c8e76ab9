//! Adapter implementations for todo controller ports.

pub mod memory;
