//! Core pipeline orchestration for DocPress.
//!
//! This crate ties together source collection, export, external compiler
//! invocation, and HTML post-processing into the end-to-end build
//! workflow (`run_build`).

pub mod collector;
pub mod exporter;
pub mod invoker;
pub mod pipeline;
