use std::path::PathBuf;

/// Errors raised while building the blacklist or walking the trees.
#[derive(Debug, thiserror::Error)]
pub enum TreeDiffError {
    #[error("error while compiling pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read configuration file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file {path}: {message}")]
    ConfigFormat { path: PathBuf, message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeDiffError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeDiffError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure happened before any filesystem traversal started.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            TreeDiffError::InvalidPattern { .. }
                | TreeDiffError::Config { .. }
                | TreeDiffError::ConfigFormat { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TreeDiffError>;
