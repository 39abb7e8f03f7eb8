//! Test utilities for filename lookup.
//!
//! This crate provides temporary directory trees to search and a guard for
//! scoped changes to process environment variables.

pub mod env;
pub mod tree;

pub use env::{EnvLock, ScopedVar};
pub use tree::SearchTree;
