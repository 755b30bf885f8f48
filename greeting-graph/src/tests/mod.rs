//! Unit tests for greeting-graph, organized by module.
//!
//! Each submodule documents the behaviour under test.

mod config;
