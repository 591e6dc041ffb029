use crate::areas::config::DiffConfig;
use crate::artifacts::diff::comparator::TreeComparator;
use crate::artifacts::diff::difference::Difference;
use crate::artifacts::filter::pattern_filter::PatternFilter;
use crate::errors::TreeDiffError;
use anyhow::Context;
use derive_new::new;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub const EXIT_IDENTICAL: u8 = 0;
pub const EXIT_DIFFERENCES: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 3;
pub const EXIT_EXECUTION_ERROR: u8 = 4;

#[derive(Debug, Clone, new)]
pub struct CompareOptions {
    pub source: PathBuf,
    pub target: PathBuf,
    #[new(default)]
    pub config: Option<PathBuf>,
    #[new(default)]
    pub excludes: Vec<String>,
}

impl CompareOptions {
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareStatus {
    Identical,
    Different,
}

impl CompareStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            CompareStatus::Identical => EXIT_IDENTICAL,
            CompareStatus::Different => EXIT_DIFFERENCES,
        }
    }
}

/// Picks the exit code for a failed comparison.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<TreeDiffError>() {
        Some(error) if error.is_config_error() => EXIT_CONFIG_ERROR,
        _ => EXIT_EXECUTION_ERROR,
    }
}

/// The compare command: filter setup, tree walk and rendering of the report.
pub struct Compare {
    writer: Box<dyn Write>,
    color: bool,
}

impl Compare {
    pub fn new(writer: Box<dyn Write>, color: bool) -> Self {
        Compare { writer, color }
    }

    pub fn build_filter(options: &CompareOptions) -> anyhow::Result<PatternFilter> {
        let config = DiffConfig::load_optional(options.config.as_deref())?;

        let patterns = config
            .blacklist_patterns
            .iter()
            .chain(options.excludes.iter());
        let filter = PatternFilter::new(patterns)?;
        if filter.is_empty() {
            debug!("No blacklist patterns, comparing every entry");
        } else {
            debug!("Compiled {} blacklist pattern(s)", filter.len());
        }

        Ok(filter)
    }

    pub fn run(&mut self, options: &CompareOptions) -> anyhow::Result<CompareStatus> {
        let filter = Self::build_filter(options)?;
        let comparator = TreeComparator::new(filter);

        let differences = comparator
            .compare(&options.source, &options.target)
            .with_context(|| {
                format!(
                    "Failed to compare {} against {}",
                    options.source.display(),
                    options.target.display()
                )
            })?;
        info!("Found {} difference(s)", differences.len());

        self.render(&differences)?;

        if differences.is_empty() {
            Ok(CompareStatus::Identical)
        } else {
            Ok(CompareStatus::Different)
        }
    }

    fn render(&mut self, differences: &[Difference]) -> anyhow::Result<()> {
        for difference in differences {
            if self.color {
                writeln!(
                    self.writer,
                    "[{}] {}",
                    difference.kind.colored_label(),
                    difference.path
                )?;
            } else {
                writeln!(self.writer, "{}", difference)?;
            }
        }
        self.writer.flush()?;

        Ok(())
    }
}
