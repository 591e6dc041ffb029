use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Location of an entry below a root.
///
/// Keeps the host path used to reach the entry on disk next to the
/// `/`-joined form that gets reported and matched against the blacklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePath {
    path: PathBuf,
    display: String,
}

impl RelativePath {
    pub fn from_name(name: &OsStr) -> Self {
        Self {
            path: PathBuf::from(name),
            display: name.to_string_lossy().into_owned(),
        }
    }

    /// Parses a `/`-separated relative path.
    pub fn parse(relative: &str) -> Self {
        let mut segments = relative.split('/').filter(|segment| !segment.is_empty());
        let Some(first) = segments.next() else {
            return Self {
                path: PathBuf::new(),
                display: String::new(),
            };
        };

        segments.fold(Self::from_name(OsStr::new(first)), |parent, segment| {
            parent.join(OsStr::new(segment))
        })
    }

    pub fn join(&self, name: &OsStr) -> Self {
        let display = if self.display.is_empty() {
            name.to_string_lossy().into_owned()
        } else {
            format!("{}/{}", self.display, name.to_string_lossy())
        };

        Self {
            path: self.path.join(name),
            display,
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl std::fmt::Display for RelativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}
