pub mod pattern_filter;
