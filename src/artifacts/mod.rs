//! Tree comparison data structures and algorithms
//!
//! - `diff`: difference records and the tree comparator
//! - `filter`: blacklist patterns matched against relative paths

pub mod diff;
pub mod filter;
