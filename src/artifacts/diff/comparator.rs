use crate::areas::tree_root::{EntryStat, TreeRoot};
use crate::artifacts::diff::difference::{Difference, DifferenceKind};
use crate::artifacts::diff::relative_path::RelativePath;
use crate::artifacts::filter::pattern_filter::PatternFilter;
use crate::errors::{Result, TreeDiffError};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, trace};

/// What to do with a source entry once both sides have been inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Matched the blacklist, the entry and its subtree are skipped.
    Excluded,
    /// Both sides agree, nothing to report.
    Matching,
    /// Both sides are directories, compare their contents.
    Descend,
    Differs(DifferenceKind),
}

impl EntryOutcome {
    /// Decision table for a source entry against its target counterpart.
    pub fn classify(source: EntryStat, target: Option<EntryStat>) -> Self {
        match (source, target) {
            (_, None) => EntryOutcome::Differs(DifferenceKind::Missing),
            (EntryStat::Directory, Some(EntryStat::Directory)) => EntryOutcome::Descend,
            (EntryStat::File { size: from }, Some(EntryStat::File { size: to })) if from != to => {
                EntryOutcome::Differs(DifferenceKind::SizeDifference)
            }
            (EntryStat::File { .. }, Some(EntryStat::File { .. })) => EntryOutcome::Matching,
            _ => EntryOutcome::Differs(DifferenceKind::TypeDifference),
        }
    }
}

/// Walks a source tree depth-first and reports how the target tree deviates from it.
///
/// The scan is driven by the source only: entries that exist solely under the
/// target root are never reported.
#[derive(Debug, Clone, Default)]
pub struct TreeComparator {
    filter: PatternFilter,
}

impl TreeComparator {
    pub fn new(filter: PatternFilter) -> Self {
        TreeComparator { filter }
    }

    /// Compares every child of `source_root` against `target_root`.
    ///
    /// The first I/O failure aborts the whole comparison and no partial
    /// result is returned.
    pub fn compare(
        &self,
        source_root: impl AsRef<Path>,
        target_root: impl AsRef<Path>,
    ) -> Result<Vec<Difference>> {
        let source = TreeRoot::new(source_root.as_ref());
        let target = TreeRoot::new(target_root.as_ref());

        let mut differences = Vec::new();
        for name in source.list_dir(Path::new(""))? {
            info!("Checking {}...", name.to_string_lossy());
            self.walk(
                &source,
                &target,
                RelativePath::from_name(&name),
                &mut differences,
            )?;
        }

        Ok(differences)
    }

    /// Compares a single entry, given as a `/`-separated path, and its subtree.
    pub fn compare_entry(
        &self,
        source_root: impl AsRef<Path>,
        relative_path: &str,
        target_root: impl AsRef<Path>,
    ) -> Result<Vec<Difference>> {
        let source = TreeRoot::new(source_root.as_ref());
        let target = TreeRoot::new(target_root.as_ref());

        let mut differences = Vec::new();
        self.walk(
            &source,
            &target,
            RelativePath::parse(relative_path),
            &mut differences,
        )?;

        Ok(differences)
    }

    // Explicit stack instead of recursion, children are pushed in reverse so
    // they pop in listing order.
    fn walk(
        &self,
        source: &TreeRoot,
        target: &TreeRoot,
        start: RelativePath,
        differences: &mut Vec<Difference>,
    ) -> Result<()> {
        let mut pending = vec![start];

        while let Some(relative) = pending.pop() {
            match self.inspect(source, target, &relative)? {
                EntryOutcome::Excluded | EntryOutcome::Matching => {}
                EntryOutcome::Differs(kind) => {
                    debug!("{} {}", kind, relative);
                    differences.push(Difference::new(kind, relative.as_str()));
                }
                EntryOutcome::Descend => {
                    let children = source.list_dir(relative.as_path())?;
                    pending.extend(children.iter().rev().map(|name| relative.join(name)));
                }
            }
        }

        Ok(())
    }

    fn inspect(
        &self,
        source: &TreeRoot,
        target: &TreeRoot,
        relative: &RelativePath,
    ) -> Result<EntryOutcome> {
        if self.filter.matches(relative.as_str()) {
            debug!("Skipping blacklisted {}", relative);
            return Ok(EntryOutcome::Excluded);
        }

        trace!("Inspecting {}", relative);

        // the entry came from a listing of the source, so it has to be there
        let source_stat = source.stat(relative.as_path())?.ok_or_else(|| {
            TreeDiffError::io(
                source.absolute(relative.as_path()),
                std::io::Error::from(ErrorKind::NotFound),
            )
        })?;
        let target_stat = target.stat(relative.as_path())?;

        Ok(EntryOutcome::classify(source_stat, target_stat))
    }
}
