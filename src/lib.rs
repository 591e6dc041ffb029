//! Structural diff of two directory trees.
//!
//! Every entry under the source root is checked against the same relative
//! path under the target root and reported when it is missing, has a
//! different size, or is a file on one side and a directory on the other.
//! File contents are never read.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use artifacts::diff::comparator::TreeComparator;
pub use artifacts::diff::difference::{Difference, DifferenceKind};
pub use artifacts::filter::pattern_filter::PatternFilter;
pub use errors::TreeDiffError;
