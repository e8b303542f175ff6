//! Post-processing for generated HTML documentation.
//!
//! Replaces the inline `<style>` block the documentation compiler embeds
//! in every page with a `<link>` to an external stylesheet, via a
//! line-oriented rewrite pass.

mod scanner;

use tracing::debug;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Result of rewriting one HTML document.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The rewritten HTML content.
    pub html: String,
    /// Number of style blocks replaced with a stylesheet link.
    pub blocks_replaced: usize,
}

// ---------------------------------------------------------------------------
// Rewriter
// ---------------------------------------------------------------------------

/// Rewrite an HTML document, replacing embedded style blocks with a
/// stylesheet `<link>` line.
///
/// The input is processed as `\n`-delimited lines and the output is the
/// kept lines rejoined with `\n`. A final trailing newline present in
/// the input is therefore dropped; this matches the reference behavior
/// and is deliberately not corrected. Documents without a style block
/// come back otherwise unchanged.
pub fn inject_stylesheet(input: &str) -> Rewrite {
    let rewrite = scanner::rewrite_lines(input);

    debug!(
        blocks_replaced = rewrite.blocks_replaced,
        in_len = input.len(),
        out_len = rewrite.html.len(),
        "html rewrite complete"
    );

    rewrite
}
