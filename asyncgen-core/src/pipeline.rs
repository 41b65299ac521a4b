//! The codegen pipeline: read → rewrite → write → format.
//!
//! These entry points are I/O-agnostic: all filesystem and subprocess operations are performed
//! through the port traits. Everything runs sequentially on the calling thread.

use crate::error::CodegenError;
use crate::ports::{FormatterPort, SourceReader, WritePort};
use crate::settings::CodegenSettings;
use asyncgen_rules::{GeneratedModule, RewriteReport, Rewriter, SourceModule};
use camino::Utf8PathBuf;
use diffy::PatchFormatter;
use tracing::{debug, info, warn};

/// Result of rewriting the source, before anything is written.
#[derive(Debug, Clone)]
pub struct Generated {
    pub source: Utf8PathBuf,
    pub module: GeneratedModule,
    pub report: RewriteReport,
}

/// Outcome of a successful `run_codegen`: the output is written and formatted.
#[derive(Debug, Clone)]
pub struct CodegenOutcome {
    pub output: Utf8PathBuf,
    pub generated: GeneratedModule,
    pub report: RewriteReport,
}

/// Read the source module and rewrite it. No side effects.
pub fn generate(
    settings: &CodegenSettings,
    reader: &dyn SourceReader,
) -> Result<Generated, CodegenError> {
    let path = settings.source_path();
    let text = reader
        .read_to_string(&path)
        .map_err(|source| CodegenError::InputUnavailable {
            path: path.clone(),
            source,
        })?;
    debug!(path = %path, bytes = text.len(), "read source module");
    let text = normalize_newlines(text);

    let rewriter =
        Rewriter::new(&settings.rule_settings())?.anchor_policy(settings.anchor_policy);
    let (module, report) = rewriter.rewrite(SourceModule::new(text))?;

    for app in report.unmatched().filter(|a| !a.anchor) {
        debug!(rule = app.rule, "rule matched nothing");
    }

    Ok(Generated {
        source: path,
        module,
        report,
    })
}

/// Rules match `\n` line endings only; CRLF and lone CR become LF before any rule runs.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    debug!("normalising CRLF/CR line endings to LF");
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Run the full pipeline and leave a formatted output file behind.
///
/// The output is overwritten unconditionally. If the formatter fails the written file stays on
/// disk unformatted and the error is returned; it must be regenerated before it is trusted.
pub fn run_codegen(
    settings: &CodegenSettings,
    reader: &dyn SourceReader,
    writer: &dyn WritePort,
    formatter: &dyn FormatterPort,
) -> Result<CodegenOutcome, CodegenError> {
    let Generated { module, report, .. } = generate(settings, reader)?;

    let output = settings.output_path();
    writer.write_file(&output, module.as_bytes())?;
    info!(
        path = %output,
        sha256 = module.sha256(),
        rules = report.applications.len(),
        matches = report.total_matches(),
        "wrote generated module"
    );

    let exit = formatter.format(&output)?;
    if !exit.success() {
        warn!(
            path = %output,
            program = formatter.program(),
            "formatter failed; generated file is unformatted"
        );
        return Err(CodegenError::FormatterFailure {
            program: formatter.program().to_string(),
            path: output,
            code: exit.code,
        });
    }
    info!(path = %output, program = formatter.program(), "formatted generated module");

    Ok(CodegenOutcome {
        output,
        generated: module,
        report,
    })
}

/// Unified diff from the current output file to the freshly generated, unformatted text.
///
/// A missing output file is treated as empty. Nothing is written and the formatter does not
/// run, so a formatted output file always shows formatting differences here.
pub fn preview_codegen(
    settings: &CodegenSettings,
    reader: &dyn SourceReader,
) -> Result<String, CodegenError> {
    let generated = generate(settings, reader)?;
    let output = settings.output_path();
    let before = match reader.read_to_string(&output) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("read {}", output))
                .into());
        }
    };
    Ok(render_patch(
        settings.output.as_str(),
        &before,
        generated.module.as_str(),
    ))
}

fn render_patch(path: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));

    let patch = diffy::create_patch(old, new);
    let formatter = PatchFormatter::new();
    out.push_str(&formatter.fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
