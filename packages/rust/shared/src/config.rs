//! Application configuration for DocPress.
//!
//! Project config lives at `<project-root>/docpress.toml`, with a user
//! fallback at `~/.docpress/docpress.toml`. CLI flags override config
//! file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocPressError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docpress.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docpress";

// ---------------------------------------------------------------------------
// Config structs (matching docpress.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Project layout: scan root and output tree.
    #[serde(default)]
    pub project: ProjectConfig,

    /// External compiler settings.
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// File extension and path-filter settings.
    #[serde(default)]
    pub extensions: ExtensionsConfig,
}

/// `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Source tree to scan, relative to the project root.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Documentation output root, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Subdirectory of `output_dir` holding the mirrored api docs.
    #[serde(default = "default_api_subdir")]
    pub api_subdir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            api_subdir: default_api_subdir(),
        }
    }
}

fn default_source_dir() -> String {
    "collections".into()
}
fn default_output_dir() -> String {
    "doc".into()
}
fn default_api_subdir() -> String {
    "api".into()
}

/// `[compiler]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Executable to invoke (must be on PATH).
    #[serde(default = "default_command")]
    pub command: String,

    /// Subcommand that builds docs from a source file.
    #[serde(default = "default_doc_command")]
    pub doc_command: String,

    /// Subcommand that converts a markup file to HTML.
    #[serde(default = "default_markup_command")]
    pub markup_command: String,

    /// Base URL for source links (`--docSeeSrcUrl:<url>`).
    /// When empty, the flag is not passed.
    #[serde(default)]
    pub src_link_base: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            doc_command: default_doc_command(),
            markup_command: default_markup_command(),
            src_link_base: String::new(),
        }
    }
}

fn default_command() -> String {
    "nim".into()
}
fn default_doc_command() -> String {
    "doc".into()
}
fn default_markup_command() -> String {
    "rst2html".into()
}

/// `[extensions]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    /// Extension of source files to export and compile.
    #[serde(default = "default_source_ext")]
    pub source: String,

    /// Extension of markup files to convert to HTML.
    #[serde(default = "default_markup_ext")]
    pub markup: String,

    /// Extension of generated HTML files to post-process.
    #[serde(default = "default_html_ext")]
    pub html: String,

    /// Substring disqualifying a markup path from conversion.
    #[serde(default = "default_exclude_marker")]
    pub exclude_marker: String,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            source: default_source_ext(),
            markup: default_markup_ext(),
            html: default_html_ext(),
            exclude_marker: default_exclude_marker(),
        }
    }
}

fn default_source_ext() -> String {
    "nim".into()
}
fn default_markup_ext() -> String {
    "rst".into()
}
fn default_html_ext() -> String {
    "html".into()
}
fn default_exclude_marker() -> String {
    "#".into()
}

// ---------------------------------------------------------------------------
// Build config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime build configuration, resolved against an explicit project root.
///
/// The reference behavior relied on changing the process working
/// directory at startup; this struct replaces that with absolute paths
/// threaded through every stage.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Absolute project root all relative paths resolve against.
    pub project_root: PathBuf,
    /// Source tree to scan, relative to the project root.
    pub source_dir: String,
    /// Output root, relative to the project root.
    pub output_dir: String,
    /// Api subtree under the output root.
    pub api_subdir: String,
    /// External compiler executable.
    pub compiler: String,
    /// Doc-generation subcommand.
    pub doc_command: String,
    /// Markup-to-HTML subcommand.
    pub markup_command: String,
    /// Source-link base URL; flag omitted when empty.
    pub src_link_base: String,
    /// Source file extension.
    pub source_ext: String,
    /// Markup file extension.
    pub markup_ext: String,
    /// HTML file extension.
    pub html_ext: String,
    /// Substring excluding markup paths from conversion.
    pub exclude_marker: String,
}

impl BuildConfig {
    /// Merge the file config with an explicit project root.
    pub fn for_root(project_root: impl Into<PathBuf>, config: &AppConfig) -> Self {
        Self {
            project_root: project_root.into(),
            source_dir: config.project.source_dir.clone(),
            output_dir: config.project.output_dir.clone(),
            api_subdir: config.project.api_subdir.clone(),
            compiler: config.compiler.command.clone(),
            doc_command: config.compiler.doc_command.clone(),
            markup_command: config.compiler.markup_command.clone(),
            src_link_base: config.compiler.src_link_base.clone(),
            source_ext: config.extensions.source.clone(),
            markup_ext: config.extensions.markup.clone(),
            html_ext: config.extensions.html.clone(),
            exclude_marker: config.extensions.exclude_marker.clone(),
        }
    }

    /// Absolute path of the scanned source tree.
    pub fn source_root(&self) -> PathBuf {
        self.project_root.join(&self.source_dir)
    }

    /// Absolute path of the documentation output root.
    pub fn output_root(&self) -> PathBuf {
        self.project_root.join(&self.output_dir)
    }

    /// Absolute path of the mirrored api output tree.
    pub fn api_root(&self) -> PathBuf {
        self.output_root().join(&self.api_subdir)
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the user config directory (`~/.docpress/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocPressError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Load the config for a project root.
///
/// Lookup order: `<project_root>/docpress.toml`, then
/// `~/.docpress/docpress.toml`, then built-in defaults.
pub fn load_config(project_root: &Path) -> Result<AppConfig> {
    let local = project_root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return load_config_from(&local);
    }

    if let Ok(dir) = config_dir() {
        let user = dir.join(CONFIG_FILE_NAME);
        if user.exists() {
            return load_config_from(&user);
        }
    }

    tracing::debug!(root = %project_root.display(), "no config file found, using defaults");
    Ok(AppConfig::default())
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocPressError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| DocPressError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Write a default config file at the project root.
/// Returns the path to the created file.
pub fn init_config(project_root: &Path) -> Result<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocPressError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocPressError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
