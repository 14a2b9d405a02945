use relative_path::{RelativePath, RelativePathBuf};
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// Character that is not allowed in published file names or URLs.
pub const RESERVED_CHAR: char = ':';
/// What every [`RESERVED_CHAR`] is replaced with.
pub const RESERVED_REPLACEMENT: &str = " -";

const MARKDOWN_SUFFIX: &str = ".md";

/// A document in the vault, identified by its path relative to the vault root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    relative_path: RelativePathBuf,
}

impl DocumentPath {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn as_str(&self) -> &str {
        self.relative_path.as_str()
    }

    /// Last path segment, extension included
    pub fn file_name(&self) -> &str {
        self.relative_path.file_name().unwrap_or("")
    }

    pub fn is_markdown(&self) -> bool {
        self.relative_path.extension() == Some("md")
    }

    /// Whether a wiki link target names this document, either by file name
    /// (`[[Plan]]`) or by its full vault-relative path (`[[notes/Plan]]`).
    pub fn matches_target(&self, target: &str) -> bool {
        let Some(path) = self.as_str().strip_suffix(MARKDOWN_SUFFIX) else {
            return false;
        };
        path == target || path.rsplit('/').next() == Some(target)
    }

    /// Path the rewritten document is stored under, with reserved characters
    /// replaced in every segment.
    pub fn output_path(&self) -> RelativePathBuf {
        RelativePathBuf::from(sanitize(self.as_str()))
    }

    pub fn is_renamed(&self) -> bool {
        self.as_str().contains(RESERVED_CHAR)
    }

    /// Published URL: `url_base`, then the sanitized path without `.md`.
    pub fn url(&self, url_base: &str) -> String {
        let base = url_base.trim_end_matches('/');
        let path = self.as_str();
        let path = path.strip_suffix(MARKDOWN_SUFFIX).unwrap_or(path);
        format!("{base}/{}", sanitize(path))
    }

    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.relative_path.to_path(root)
    }
}

fn sanitize(path: &str) -> String {
    path.replace(RESERVED_CHAR, RESERVED_REPLACEMENT)
}

/// Documents order by their path string, so `Plan.md` sorts relative to
/// `Plan 2.md` the same way on every platform.
impl Ord for DocumentPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for DocumentPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RelativePathBuf> for DocumentPath {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for DocumentPath {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
