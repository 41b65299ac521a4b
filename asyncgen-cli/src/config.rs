//! Configuration file loading for asyncgen.
//!
//! Discovers and loads `asyncgen.toml` from the repository root.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use asyncgen_core::AnchorPolicy;
use asyncgen_core::settings::{CodegenSettings, FormatterSettings};
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "asyncgen.toml";

/// Top-level configuration from asyncgen.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsyncgenConfig {
    /// Input and output module paths.
    pub paths: PathsConfig,

    /// External formatter command.
    pub formatter: FormatterConfig,

    /// Rewrite behaviour.
    pub rewrite: RewriteConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Sync source module, relative to the repository root.
    pub source: Option<Utf8PathBuf>,

    /// Generated async module, relative to the repository root.
    pub output: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Formatter executable.
    pub program: Option<String>,

    /// Arguments placed before the output path.
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriteConfig {
    /// `legacy` (missing anchors only warn) or `strict` (missing anchors fail the run).
    pub anchor_policy: Option<AnchorPolicy>,

    /// Command named in the generated file's banner.
    pub regenerate_command: Option<String>,
}

/// Discover the asyncgen.toml config file.
///
/// Returns `None` if no config file is found in the repository root.
pub fn discover_config(repo_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = repo_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse an asyncgen.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<AsyncgenConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<AsyncgenConfig> {
    let config: AsyncgenConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from repo root, or return default if not found.
pub fn load_or_default(repo_root: &Utf8Path) -> anyhow::Result<AsyncgenConfig> {
    match discover_config(repo_root) {
        Some(path) => load_config(&path),
        None => Ok(AsyncgenConfig::default()),
    }
}

/// Codegen options given on the command line. `None`/`false` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source: Option<Utf8PathBuf>,
    pub output: Option<Utf8PathBuf>,
    pub formatter: Option<String>,
    pub strict_anchors: bool,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: AsyncgenConfig,
}

impl ConfigMerger {
    pub fn new(config: AsyncgenConfig) -> Self {
        Self { config }
    }

    /// Merge into pipeline settings: CLI over config file over built-in defaults.
    ///
    /// `--formatter` replaces only the program; configured arguments are kept.
    pub fn merge(self, repo_root: Utf8PathBuf, cli: &CliOverrides) -> CodegenSettings {
        let defaults = CodegenSettings::default();
        let default_formatter = FormatterSettings::default();
        let cfg = self.config;

        let anchor_policy = if cli.strict_anchors {
            AnchorPolicy::Strict
        } else {
            cfg.rewrite.anchor_policy.unwrap_or(defaults.anchor_policy)
        };

        CodegenSettings {
            repo_root,
            source: cli
                .source
                .clone()
                .or(cfg.paths.source)
                .unwrap_or(defaults.source),
            output: cli
                .output
                .clone()
                .or(cfg.paths.output)
                .unwrap_or(defaults.output),
            regenerate_command: cfg
                .rewrite
                .regenerate_command
                .unwrap_or(defaults.regenerate_command),
            anchor_policy,
            formatter: FormatterSettings {
                program: cli
                    .formatter
                    .clone()
                    .or(cfg.formatter.program)
                    .unwrap_or(default_formatter.program),
                args: cfg.formatter.args.unwrap_or(default_formatter.args),
            },
        }
    }
}
