//! Error types for asyncgen-core.
//!
//! Every variant aborts the run:
//! - Input unavailable (exit code 1): the sync source could not be read; nothing was written.
//! - Pattern mismatch (exit code 2): a strict anchor was missing; nothing was written.
//! - Formatter failure (exit code 3): the output was written but is not formatted.
//! - Runtime errors (exit code 1): write failures, formatter could not be started.

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    /// The source module could not be read.
    #[error("input unavailable: cannot read {path}: {source}")]
    InputUnavailable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rules could not be built, or the source text does not have the shape they expect.
    #[error("rewrite failed: {0}")]
    Rewrite(#[from] asyncgen_rules::RewriteError),

    /// The formatter ran and exited unsuccessfully.
    #[error("formatter `{program}` failed on {path} (exit status: {})", display_code(.code))]
    FormatterFailure {
        program: String,
        path: Utf8PathBuf,
        /// `None` when the process was terminated by a signal.
        code: Option<i32>,
    },

    #[error("runtime error: {0:#}")]
    Runtime(#[from] anyhow::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "terminated by signal".to_string(),
    }
}

impl CodegenError {
    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CodegenError::InputUnavailable { .. } => 1,
            CodegenError::Rewrite(e) if e.is_pattern_mismatch() => 2,
            CodegenError::Rewrite(_) => 1,
            CodegenError::FormatterFailure { .. } => 3,
            CodegenError::Runtime(_) => 1,
        }
    }

    /// True if the source did not match an anchor the rules require.
    pub fn is_pattern_mismatch(&self) -> bool {
        matches!(self, CodegenError::Rewrite(e) if e.is_pattern_mismatch())
    }

    /// True if the output file may exist on disk in an untrusted state.
    pub fn leaves_partial_output(&self) -> bool {
        matches!(self, CodegenError::FormatterFailure { .. })
    }
}
