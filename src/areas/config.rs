use crate::errors::{Result, TreeDiffError};
use serde::Deserialize;
use std::path::Path;

/// Contents of the optional configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiffConfig {
    #[serde(
        default,
        rename = "blacklistPatterns",
        alias = "BlacklistPatterns",
        alias = "BlacklistedPatterns"
    )]
    pub blacklist_patterns: Vec<String>,
}

impl DiffConfig {
    /// Reads `path`, as TOML when it has a `.toml` extension and as JSON otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TreeDiffError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            toml::from_str::<DiffConfig>(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<DiffConfig>(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| TreeDiffError::ConfigFormat {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Loads the file when one is given, an absent file means no patterns.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
