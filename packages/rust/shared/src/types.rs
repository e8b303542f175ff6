//! Core domain types for the DocPress build pipeline.

use std::path::{Path, PathBuf};

/// A source file discovered by the collector.
///
/// Holds the path relative to the project root, including the scan
/// directory component (e.g. `collections/foo/bar.nim`). The same
/// relative path addresses the file in both the source tree and the
/// mirrored api output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    rel: PathBuf,
}

impl SourceFile {
    /// Wrap a path relative to the project root.
    pub fn new(rel: impl Into<PathBuf>) -> Self {
        Self { rel: rel.into() }
    }

    /// The relative path within the project.
    pub fn rel_path(&self) -> &Path {
        &self.rel
    }

    /// Absolute location of the original file under the project root.
    pub fn source_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.rel)
    }

    /// Absolute location of the exported copy under the api output root.
    pub fn export_path(&self, api_root: &Path) -> PathBuf {
        api_root.join(&self.rel)
    }
}

impl std::fmt::Display for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rel.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_file_path_resolution() {
        let file = SourceFile::new("collections/foo/bar.nim");
        let root = Path::new("/proj");
        let api = Path::new("/proj/doc/api");

        assert_eq!(
            file.source_path(root),
            PathBuf::from("/proj/collections/foo/bar.nim")
        );
        assert_eq!(
            file.export_path(api),
            PathBuf::from("/proj/doc/api/collections/foo/bar.nim")
        );
        assert_eq!(file.to_string(), "collections/foo/bar.nim");
    }
}
