use crate::errors::{Result, TreeDiffError};
use regex::Regex;

/// Blacklist of regular expressions tested against relative paths.
///
/// A path matching any pattern is excluded from the comparison, and so is
/// everything below it when it names a directory.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    patterns: Vec<Regex>,
}

impl PatternFilter {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles every pattern, stopping at the first one that is not a valid regex.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| TreeDiffError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(relative_path))
    }
}
