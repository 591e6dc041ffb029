#![allow(dead_code)]

pub mod command;
pub mod file;

use treediff::Difference;

// Comparator output order is not part of the contract, compare as sets.
pub fn sorted(mut differences: Vec<Difference>) -> Vec<Difference> {
    differences.sort();
    differences
}
