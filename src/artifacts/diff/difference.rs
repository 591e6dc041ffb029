use colored::{ColoredString, Colorize};
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifferenceKind {
    /// Present under the source root, absent under the target root.
    Missing,
    /// Both sides are files of different sizes.
    SizeDifference,
    /// One side is a file, the other a directory.
    TypeDifference,
}

impl DifferenceKind {
    pub fn label(&self) -> char {
        match self {
            DifferenceKind::Missing => 'M',
            DifferenceKind::SizeDifference => 'S',
            DifferenceKind::TypeDifference => 'T',
        }
    }

    pub fn colored_label(&self) -> ColoredString {
        let label = self.label().to_string();
        match self {
            DifferenceKind::Missing => label.red(),
            DifferenceKind::SizeDifference => label.yellow(),
            DifferenceKind::TypeDifference => label.magenta(),
        }
    }
}

impl From<&DifferenceKind> for &str {
    fn from(kind: &DifferenceKind) -> Self {
        match kind {
            DifferenceKind::Missing => "missing",
            DifferenceKind::SizeDifference => "size difference",
            DifferenceKind::TypeDifference => "type difference",
        }
    }
}

impl std::fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind_str: &str = self.into();
        write!(f, "{}", kind_str)
    }
}

/// A single deviation of the target tree from the source tree.
///
/// `path` is relative to both roots and always joined with `/`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Difference {
    pub kind: DifferenceKind,
    #[new(into)]
    pub path: String,
}

impl std::fmt::Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.label(), self.path)
    }
}
