use crate::errors::{Result, TreeDiffError};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What a stat of a relative path found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStat {
    File { size: u64 },
    Directory,
}

impl From<std::fs::Metadata> for EntryStat {
    fn from(metadata: std::fs::Metadata) -> Self {
        if metadata.is_dir() {
            EntryStat::Directory
        } else {
            EntryStat::File {
                size: metadata.len(),
            }
        }
    }
}

/// One of the two directories being compared.
#[derive(Debug)]
pub struct TreeRoot {
    path: Box<Path>,
}

impl TreeRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TreeRoot {
            path: path.into().into_boxed_path(),
        }
    }

    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.path.join(relative)
    }

    /// Names of the children of `relative`, sorted so reports come out stable.
    pub fn list_dir(&self, relative: &Path) -> Result<Vec<OsString>> {
        let dir_path = self.absolute(relative);

        let mut names = std::fs::read_dir(&dir_path)
            .map_err(|e| TreeDiffError::io(&dir_path, e))?
            .map(|entry| {
                entry
                    .map(|entry| entry.file_name())
                    .map_err(|e| TreeDiffError::io(&dir_path, e))
            })
            .collect::<Result<Vec<_>>>()?;
        names.sort();

        Ok(names)
    }

    /// Follows symlinks. A missing entry is `Ok(None)`, not an error.
    pub fn stat(&self, relative: &Path) -> Result<Option<EntryStat>> {
        let entry_path = self.absolute(relative);

        match std::fs::metadata(&entry_path) {
            Ok(metadata) => Ok(Some(metadata.into())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TreeDiffError::io(entry_path, e)),
        }
    }
}
