//! Domain logic: turn the sync client module into the async one by ordered text rewriting.
//!
//! This crate owns *what* gets rewritten and in which order. It does not own reading, writing or
//! formatting files; that's the `asyncgen-core` crate.
//!
//! The rewrite is a left fold of [`RewriteRule`]s over a [`SourceModule`]. Rules match text
//! patterns, not syntax trees, and assume one known input shape: the `LineBotApi` class of
//! `linebot/api.py`. Running the rewriter on its own output is not supported; always regenerate
//! from the sync source.

mod error;
mod module;
mod report;
mod rewriter;
mod rule;
mod rules;

pub use error::RewriteError;
pub use module::{GeneratedModule, SourceModule};
pub use report::{RewriteReport, RuleApplication};
pub use rewriter::{AnchorPolicy, Rewriter};
pub use rule::{RewriteRule, Rewritten, RuleCategory, RuleMeta};
pub use rules::{
    AsyncDefRule, HeaderBanner, PatternRule, RuleSettings, builtin_rule_metas, builtin_rules,
};
