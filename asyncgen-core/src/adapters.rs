//! Default filesystem and subprocess port implementations.

use crate::ports::{FormatterExit, FormatterPort, SourceReader, WritePort};
use crate::settings::FormatterSettings;
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use std::process::Command;
use tracing::debug;

/// Reads sources from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read_to_string(&self, path: &Utf8Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }
}

/// Runs a formatter as a child process: `<program> <args...> <path>`.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_settings(settings: &FormatterSettings) -> Self {
        Self::new(settings.program.clone(), settings.args.clone())
    }
}

impl FormatterPort for CommandFormatter {
    fn program(&self) -> &str {
        &self.program
    }

    fn format(&self, path: &Utf8Path) -> anyhow::Result<FormatterExit> {
        debug!(program = %self.program, args = ?self.args, path = %path, "running formatter");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path.as_str())
            .status()
            .with_context(|| format!("spawn formatter `{}`", self.program))?;
        Ok(FormatterExit {
            code: status.code(),
        })
    }
}
