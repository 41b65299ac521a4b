//! Error types for asyncgen-rules.

use thiserror::Error;

/// Errors raised while building or running the rewrite rules.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// An anchor rule found nothing to replace and the policy is strict.
    #[error("anchor not found: rule `{rule}` matched nothing in the source")]
    AnchorNotFound {
        /// Id of the rule whose anchor was missing.
        rule: String,
    },

    /// A rule pattern failed to compile.
    #[error("invalid pattern for rule `{rule}`: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

impl RewriteError {
    /// Returns true if the source text did not have the shape the rules expect.
    pub fn is_pattern_mismatch(&self) -> bool {
        matches!(self, RewriteError::AnchorNotFound { .. })
    }
}
