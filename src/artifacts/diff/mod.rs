pub mod comparator;
pub mod difference;
pub mod relative_path;
