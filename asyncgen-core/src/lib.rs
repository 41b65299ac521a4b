//! Embeddable core library for asyncgen.
//!
//! Provides a clap-free, I/O-abstracted entry point for generating the async client module.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`SourceReader`](ports::SourceReader): read the sync source module
//! - [`WritePort`](ports::WritePort): write the generated module
//! - [`FormatterPort`](ports::FormatterPort): run the external formatter on the written file
//!
//! The [`adapters`] module provides default filesystem and subprocess implementations.
//!
//! # Entry points
//!
//! - [`run_codegen`](pipeline::run_codegen): read, rewrite, write, format
//! - [`preview_codegen`](pipeline::preview_codegen): diff of what a run would write

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use error::CodegenError;

// Re-export the domain types so callers don't need asyncgen-rules directly.
pub use asyncgen_rules::{
    AnchorPolicy, GeneratedModule, RewriteReport, RuleApplication, RuleMeta, builtin_rule_metas,
};
