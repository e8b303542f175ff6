//! Source file exporter.
//!
//! Copies each collected source file byte-for-byte into its mirrored
//! location under the api output root. Destinations are overwritten;
//! the collector has already created every parent directory.

use std::path::PathBuf;

use tracing::debug;

use docpress_shared::{BuildConfig, DocPressError, Result, SourceFile};

/// Copy one source file into the output tree, returning the export path.
pub fn export(config: &BuildConfig, file: &SourceFile) -> Result<PathBuf> {
    let src = file.source_path(&config.project_root);
    let dst = file.export_path(&config.api_root());

    let bytes = std::fs::read(&src).map_err(|e| DocPressError::io(&src, e))?;
    std::fs::write(&dst, &bytes).map_err(|e| DocPressError::io(&dst, e))?;

    debug!(file = %file, bytes = bytes.len(), "exported source file");
    Ok(dst)
}
