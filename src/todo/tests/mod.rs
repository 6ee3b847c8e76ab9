//! Unit tests for the todo module.
//!
//! Tests are organised by concern: domain values, view event decoding,
//! controller orchestration against a mocked store, and the headless view.
