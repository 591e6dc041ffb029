//! Filesystem-facing building blocks
//!
//! - `config`: the optional blacklist configuration file
//! - `tree_root`: listing and stat-ing entries below a source or target root

pub mod config;
pub mod tree_root;
