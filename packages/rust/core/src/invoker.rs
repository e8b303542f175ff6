//! External compiler invocation.
//!
//! Every call is a blocking `std::process::Command` run with an
//! immediate exit-status check. A non-zero exit aborts the build with
//! the program, input file, and exit code; there is no retry and no
//! continuation to the next file.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use docpress_shared::{BuildConfig, DocPressError, Result};

/// Invoke the documentation compiler on one exported source file.
///
/// Runs `<command> <doc_command> [--docSeeSrcUrl:<base>] <file>`. The
/// source-link flag is omitted when no base URL is configured.
pub fn compile_source(config: &BuildConfig, exported: &Path) -> Result<()> {
    let mut cmd = Command::new(&config.compiler);
    cmd.arg(&config.doc_command);
    if !config.src_link_base.is_empty() {
        cmd.arg(format!("--docSeeSrcUrl:{}", config.src_link_base));
    }
    cmd.arg(exported);

    debug!(file = %exported.display(), "compiling documentation");
    run_checked(cmd, &config.compiler, exported)
}

/// Invoke the markup-to-HTML converter on one markup file.
///
/// Runs `<command> <markup_command> <file>`.
pub fn convert_markup(config: &BuildConfig, path: &Path) -> Result<()> {
    let mut cmd = Command::new(&config.compiler);
    cmd.arg(&config.markup_command).arg(path);

    debug!(file = %path.display(), "converting markup");
    run_checked(cmd, &config.compiler, path)
}

/// Run a command to completion and check its exit status.
fn run_checked(mut cmd: Command, program: &str, file: &Path) -> Result<()> {
    let status = cmd
        .status()
        .map_err(|e| DocPressError::spawn(program, e))?;

    if !status.success() {
        return Err(DocPressError::compiler(program, file, status.code()));
    }

    Ok(())
}
