use anyhow::Context;
use clap::{Parser, Subcommand};
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Regenerate linebot/async_api.py from linebot/api.py.
    Codegen,
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Codegen => {
            let status = ProcessCommand::new("cargo")
                .args(["run", "-p", "asyncgen", "--", "codegen"])
                .status()
                .context("run asyncgen codegen")?;
            if !status.success() {
                anyhow::bail!("codegen failed ({status})");
            }
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "asyncgen-rules", "--test", "golden_fixture"])
                .env("ASYNCGEN_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_subcommands_parse() {
        let cli = Cli::try_parse_from(["xtask", "codegen"]).unwrap();
        assert!(matches!(cli.cmd, Command::Codegen));
        let cli = Cli::try_parse_from(["xtask", "bless-fixtures"]).unwrap();
        assert!(matches!(cli.cmd, Command::BlessFixtures));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["xtask", "validate"]).is_err());
    }
}
