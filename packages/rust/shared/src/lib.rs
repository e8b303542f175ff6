//! Shared types, error model, and configuration for DocPress.
//!
//! This crate is the foundation depended on by all other DocPress crates.
//! It provides:
//! - [`DocPressError`] — the unified error type
//! - Domain types ([`SourceFile`])
//! - Configuration ([`AppConfig`], [`BuildConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, BuildConfig, CompilerConfig, ExtensionsConfig, ProjectConfig, config_dir,
    init_config, load_config, load_config_from,
};
pub use error::{DocPressError, Result};
pub use types::SourceFile;
