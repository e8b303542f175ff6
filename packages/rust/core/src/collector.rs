//! Source tree collector.
//!
//! Walks the configured source tree, mirrors its directory structure
//! under the api output root, and gathers the source files to export.
//! Traversal order is the filesystem's natural enumeration order; no
//! correctness property depends on it, but it fixes the order in which
//! files are later compiled.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use docpress_shared::{BuildConfig, DocPressError, Result, SourceFile};

/// Walk the source tree, mirroring directories and collecting source files.
///
/// Fails with [`DocPressError::PathNotFound`] when the scan root is
/// missing. Directory creation is idempotent; pre-existing mirrored
/// directories are not an error. Empty directories are mirrored too.
#[instrument(skip_all, fields(root = %config.source_root().display()))]
pub fn collect(config: &BuildConfig) -> Result<Vec<SourceFile>> {
    let source_root = config.source_root();
    if !source_root.starts_with(&config.project_root) {
        // An absolute source_dir escapes the root on join; relative
        // paths stay mirrorable under the api output tree.
        return Err(DocPressError::config(format!(
            "source_dir '{}' resolves outside the project root {}",
            config.source_dir,
            config.project_root.display()
        )));
    }
    if !source_root.exists() {
        return Err(DocPressError::path_not_found(source_root));
    }

    let api_root = config.api_root();
    std::fs::create_dir_all(&api_root).map_err(|e| DocPressError::io(&api_root, e))?;

    let mut files = Vec::new();

    for entry in WalkDir::new(&source_root) {
        let entry = entry.map_err(walk_error)?;
        let Ok(rel) = entry.path().strip_prefix(&config.project_root) else {
            continue;
        };

        if entry.file_type().is_dir() {
            let mirrored = api_root.join(rel);
            std::fs::create_dir_all(&mirrored)
                .map_err(|e| DocPressError::io(&mirrored, e))?;
            debug!(dir = %mirrored.display(), "mirrored directory");
            continue;
        }

        if entry.file_type().is_file() && has_extension(entry.path(), &config.source_ext) {
            files.push(SourceFile::new(rel));
        }
    }

    debug!(count = files.len(), "source files collected");
    Ok(files)
}

/// True when the file name ends in `.<ext>`.
pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

/// Wrap a traversal error with the offending path.
fn walk_error(err: walkdir::Error) -> DocPressError {
    let path: PathBuf = err.path().map_or_else(PathBuf::new, Path::to_path_buf);
    DocPressError::io(path, err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpress_shared::AppConfig;

    fn config_for(root: &Path) -> BuildConfig {
        BuildConfig::for_root(root, &AppConfig::default())
    }

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn missing_scan_root_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = collect(&config_for(tmp.path())).unwrap_err();
        assert!(matches!(err, DocPressError::PathNotFound { .. }));
    }

    #[test]
    fn absolute_source_dir_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();

        let mut config = config_for(tmp.path());
        config.source_dir = elsewhere.path().display().to_string();

        let err = collect(&config).unwrap_err();
        assert!(matches!(err, DocPressError::Config { .. }));
        assert!(err.to_string().contains("outside the project root"));
    }

    #[test]
    fn mirrors_directory_structure() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("collections/net/tcp.nim"));
        std::fs::create_dir_all(tmp.path().join("collections/empty/inner")).unwrap();

        collect(&config_for(tmp.path())).unwrap();

        let api = tmp.path().join("doc/api");
        assert!(api.join("collections").is_dir());
        assert!(api.join("collections/net").is_dir());
        assert!(api.join("collections/empty/inner").is_dir());
    }

    #[test]
    fn collects_only_source_extension() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("collections/a.nim"));
        touch(&tmp.path().join("collections/sub/b.nim"));
        touch(&tmp.path().join("collections/readme.rst"));
        touch(&tmp.path().join("collections/notes.txt"));

        let mut files = collect(&config_for(tmp.path())).unwrap();
        files.sort_by(|a, b| a.rel_path().cmp(b.rel_path()));

        let rels: Vec<_> = files.iter().map(ToString::to_string).collect();
        assert_eq!(rels, vec!["collections/a.nim", "collections/sub/b.nim"]);
    }

    #[test]
    fn recollect_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("collections/a.nim"));

        let config = config_for(tmp.path());
        let first = collect(&config).unwrap();
        // Mirrored directories already exist on the second pass.
        let second = collect(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_scan_root_yields_no_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("collections")).unwrap();

        let files = collect(&config_for(tmp.path())).unwrap();
        assert!(files.is_empty());
        assert!(tmp.path().join("doc/api/collections").is_dir());
    }
}
