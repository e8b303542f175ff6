//! End-to-end build pipeline: collect → export → compile → post-process.
//!
//! Execution is strictly sequential: each phase completes before the
//! next begins, and the first failure aborts the run, leaving the
//! output tree partially updated (no rollback by contract).

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, instrument};
use walkdir::WalkDir;

use docpress_shared::{BuildConfig, DocPressError, Result};

use crate::{collector, exporter, invoker};

/// Result of a completed build.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Number of source files exported and compiled.
    pub sources: usize,
    /// Number of markup files converted to HTML.
    pub markup_converted: usize,
    /// Number of HTML files rewritten by the post-processor.
    pub html_rewritten: usize,
    /// Number of style blocks replaced across all rewritten files.
    pub style_blocks_replaced: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each file within a phase.
    fn file_processed(&self, path: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, outcome: &BuildOutcome);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn file_processed(&self, _path: &str, _current: usize, _total: usize) {}
    fn done(&self, _outcome: &BuildOutcome) {}
}

/// Run the full build pipeline.
///
/// 1. Collect: mirror the source tree, gather source files
/// 2. Export: copy each source file into the output tree
/// 3. Compile: invoke the doc compiler per exported file, then the
///    markup converter per qualifying markup file
/// 4. Post-process: rewrite generated HTML outside the api subtree
#[instrument(skip_all, fields(root = %config.project_root.display()))]
pub fn run_build(
    config: &BuildConfig,
    progress: &dyn ProgressReporter,
) -> Result<BuildOutcome> {
    let start = Instant::now();

    // --- Phase 1: Collect ---
    progress.phase("Collecting source files");
    let sources = collector::collect(config)?;
    info!(count = sources.len(), "source files collected");

    // --- Phase 2: Export ---
    progress.phase("Exporting source files");
    let total = sources.len();
    let mut exported: Vec<PathBuf> = Vec::with_capacity(total);
    for (i, file) in sources.iter().enumerate() {
        let path = exporter::export(config, file)?;
        progress.file_processed(&file.to_string(), i + 1, total);
        exported.push(path);
    }

    // --- Phase 3: Compile sources (in collection order) ---
    progress.phase("Compiling documentation");
    for (i, path) in exported.iter().enumerate() {
        invoker::compile_source(config, path)?;
        progress.file_processed(&path.display().to_string(), i + 1, total);
    }

    // --- Phase 4: Convert markup ---
    // Every source compilation has completed before this walk begins.
    progress.phase("Converting markup");
    let markup = output_files(config, |path| is_markup_target(config, path))?;
    let markup_total = markup.len();
    for (i, path) in markup.iter().enumerate() {
        invoker::convert_markup(config, path)?;
        progress.file_processed(&path.display().to_string(), i + 1, markup_total);
    }
    info!(count = markup_total, "markup files converted");

    // --- Phase 5: Rewrite HTML ---
    progress.phase("Rewriting HTML");
    let html = output_files(config, |path| is_rewrite_target(config, path))?;
    let mut style_blocks_replaced = 0;
    let html_total = html.len();
    for (i, path) in html.iter().enumerate() {
        let content =
            std::fs::read_to_string(path).map_err(|e| DocPressError::io(path, e))?;
        let rewrite = docpress_html::inject_stylesheet(&content);
        std::fs::write(path, rewrite.html).map_err(|e| DocPressError::io(path, e))?;
        style_blocks_replaced += rewrite.blocks_replaced;
        progress.file_processed(&path.display().to_string(), i + 1, html_total);
    }

    let outcome = BuildOutcome {
        sources: total,
        markup_converted: markup_total,
        html_rewritten: html_total,
        style_blocks_replaced,
        elapsed: start.elapsed(),
    };

    progress.done(&outcome);

    info!(
        sources = outcome.sources,
        markup_converted = outcome.markup_converted,
        html_rewritten = outcome.html_rewritten,
        style_blocks_replaced = outcome.style_blocks_replaced,
        elapsed_ms = outcome.elapsed.as_millis(),
        "build complete"
    );

    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Output tree walks
// ---------------------------------------------------------------------------

/// Walk the output tree in enumeration order, keeping files matching the
/// predicate.
fn output_files(
    config: &BuildConfig,
    keep: impl Fn(&Path) -> bool,
) -> Result<Vec<PathBuf>> {
    let root = config.output_root();
    let mut files = Vec::new();

    for entry in WalkDir::new(&root) {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(PathBuf::new, Path::to_path_buf);
            DocPressError::io(path, e.into())
        })?;

        if entry.file_type().is_file() && keep(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// A markup file eligible for conversion: markup extension, path free of
/// the exclusion marker. The whole output tree qualifies, api subtree
/// included. The marker test applies to the project-relative path only,
/// so marker characters in the project root's own name do not disqualify
/// anything.
fn is_markup_target(config: &BuildConfig, path: &Path) -> bool {
    let rel = path.strip_prefix(&config.project_root).unwrap_or(path);
    collector::has_extension(path, &config.markup_ext)
        && !rel.to_string_lossy().contains(&config.exclude_marker)
}

/// An HTML file eligible for rewriting: HTML extension, located outside
/// the api output subtree.
fn is_rewrite_target(config: &BuildConfig, path: &Path) -> bool {
    collector::has_extension(path, &config.html_ext) && !path.starts_with(config.api_root())
}
