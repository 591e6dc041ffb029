//! Command implementations
//!
//! - `compare`: compares a source tree against a target tree and renders the
//!   differences, one `[label] path` line each.

pub mod compare;
