mod config;

use anyhow::Context;
use asyncgen_core::adapters::{CommandFormatter, FsSourceReader, FsWritePort};
use asyncgen_core::pipeline::{CodegenOutcome, preview_codegen, run_codegen};
use asyncgen_core::{CodegenError, RewriteReport, builtin_rule_metas};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use config::{CliOverrides, ConfigMerger};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "asyncgen",
    version,
    about = "Regenerates the async LINE Messaging API client from the sync one."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite the sync client into the async client, then run the formatter on it.
    Codegen(CodegenArgs),
    /// List the rewrite rules in application order.
    ListRules(ListRulesArgs),
}

#[derive(Debug, Parser)]
struct CodegenArgs {
    /// Repository root (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Sync source module (default: linebot/api.py).
    #[arg(long)]
    source: Option<Utf8PathBuf>,

    /// Generated async module (default: linebot/async_api.py).
    #[arg(long)]
    output: Option<Utf8PathBuf>,

    /// Fail when an anchored rule finds nothing to replace.
    #[arg(long, default_value_t = false)]
    strict_anchors: bool,

    /// Formatter executable; configured formatter arguments are kept.
    #[arg(long)]
    formatter: Option<String>,

    /// Print the diff against the current output instead of writing it.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Summary format printed after a successful run.
    #[arg(long, value_enum, default_value = "text")]
    report: OutputFormat,
}

#[derive(Debug, Parser)]
struct ListRulesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        let Some(err) = e.downcast_ref::<CodegenError>() else {
            return ExitCode::from(1);
        };
        if err.leaves_partial_output() {
            error!("the generated module was written unformatted; fix the formatter and regenerate");
        }
        return ExitCode::from(err.exit_code());
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Codegen(args) => cmd_codegen(args),
        Command::ListRules(args) => cmd_list_rules(args),
    }
}

fn cmd_codegen(args: CodegenArgs) -> anyhow::Result<()> {
    let repo_root = args.repo_root;

    // Load config file and merge with CLI arguments
    let file_config =
        config::load_or_default(&repo_root).context("load asyncgen.toml config")?;
    let overrides = CliOverrides {
        source: args.source,
        output: args.output,
        formatter: args.formatter,
        strict_anchors: args.strict_anchors,
    };
    let settings = ConfigMerger::new(file_config).merge(repo_root, &overrides);

    debug!(
        "merged config: source={}, output={}, anchor_policy={:?}, formatter={:?}",
        settings.source, settings.output, settings.anchor_policy, settings.formatter
    );

    if args.dry_run {
        let patch = preview_codegen(&settings, &FsSourceReader)?;
        if patch.is_empty() {
            eprintln!("{} is up to date", settings.output_path());
        } else {
            print!("{}", patch);
        }
        return Ok(());
    }

    let formatter = CommandFormatter::from_settings(&settings.formatter);
    let outcome = run_codegen(&settings, &FsSourceReader, &FsWritePort, &formatter)?;

    match args.report {
        OutputFormat::Text => print_text_summary(&outcome),
        OutputFormat::Json => {
            let summary = CodegenSummary {
                output: outcome.output.as_str(),
                sha256: outcome.generated.sha256(),
                report: &outcome.report,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CodegenSummary<'a> {
    output: &'a str,
    sha256: &'a str,
    report: &'a RewriteReport,
}

fn print_text_summary(outcome: &CodegenOutcome) {
    println!("Wrote {}", outcome.output);
    println!("sha256: {}\n", outcome.generated.sha256());
    println!("  {:<34} {:<12} MATCHES", "RULE", "CATEGORY");
    println!("  {:<34} {:<12} -------", "----", "--------");
    for app in &outcome.report.applications {
        println!("  {:<34} {:<12} {}", app.rule, app.category.as_str(), app.matches);
    }
    println!();
    println!("Total matches: {}", outcome.report.total_matches());
}

fn cmd_list_rules(args: ListRulesArgs) -> anyhow::Result<()> {
    let rules = builtin_rule_metas().context("build rule catalogue")?;

    match args.format {
        OutputFormat::Text => {
            println!("Rewrite rules (in application order):\n");
            println!("  {:<34} {:<12} DESCRIPTION", "ID", "CATEGORY");
            println!("  {:<34} {:<12} -----------", "--", "--------");
            for rule in &rules {
                let anchor = if rule.anchor { " [anchor]" } else { "" };
                println!(
                    "  {:<34} {:<12} {}{}",
                    rule.id, rule.category.as_str(), rule.description, anchor
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}
