//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;

/// Read access to module sources.
pub trait SourceReader {
    fn read_to_string(&self, path: &Utf8Path) -> std::io::Result<String>;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}

/// How the formatter process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterExit {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl FormatterExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs the external formatter on a file in place, blocking until it exits.
///
/// `Err` means the formatter could not be run at all; a formatter that ran and failed is
/// reported through [`FormatterExit`].
pub trait FormatterPort {
    fn program(&self) -> &str;

    fn format(&self, path: &Utf8Path) -> anyhow::Result<FormatterExit>;
}
