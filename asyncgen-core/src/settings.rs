//! Clap-free settings for the codegen pipeline.

use asyncgen_rules::{AnchorPolicy, RuleSettings};
use camino::{Utf8Path, Utf8PathBuf};

/// External formatter command. The output path is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterSettings {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec!["-m".to_string(), "black".to_string()],
        }
    }
}

/// Settings for the codegen pipeline.
#[derive(Debug, Clone)]
pub struct CodegenSettings {
    pub repo_root: Utf8PathBuf,

    // Paths, relative to repo_root unless absolute.
    pub source: Utf8PathBuf,
    pub output: Utf8PathBuf,

    // Rewrite
    pub regenerate_command: String,
    pub anchor_policy: AnchorPolicy,

    // Formatting
    pub formatter: FormatterSettings,
}

impl Default for CodegenSettings {
    fn default() -> Self {
        Self {
            repo_root: Utf8PathBuf::from("."),
            source: Utf8PathBuf::from("linebot/api.py"),
            output: Utf8PathBuf::from("linebot/async_api.py"),
            regenerate_command: "asyncgen codegen".to_string(),
            anchor_policy: AnchorPolicy::default(),
            formatter: FormatterSettings::default(),
        }
    }
}

impl CodegenSettings {
    pub fn source_path(&self) -> Utf8PathBuf {
        resolve(&self.repo_root, &self.source)
    }

    pub fn output_path(&self) -> Utf8PathBuf {
        resolve(&self.repo_root, &self.output)
    }

    /// Banner inputs for the rewrite rules.
    pub fn rule_settings(&self) -> RuleSettings {
        RuleSettings {
            source_name: self.source.as_str().replace('\\', "/"),
            regenerate_command: self.regenerate_command.clone(),
        }
    }
}

fn resolve(root: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
