//! xtask - build tasks for wcgen
//!
//! Run with: cargo xtask gen-docs [--man] [--markdown]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use wcgen::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for wcgen")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate man pages and COMMANDS.md from the CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Only man pages
        #[arg(long)]
        man: bool,

        /// Only COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let both = !man && !markdown;
            if both || man {
                write_man_pages(&output)?;
            }
            if both || markdown {
                write_markdown(&output)?;
            }
        }
    }
    Ok(())
}

/// Visible subcommands of `cmd`, skipping the generated `help`.
fn visible(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands()
        .filter(|sub| !sub.is_hide_set() && sub.get_name() != "help")
}

fn write_man_pages(output: &Path) -> Result<()> {
    let dir = output.join("man");
    fs::create_dir_all(&dir).context("Failed to create man directory")?;
    let cmd = Cli::command();
    render_man(&cmd, "wcgen", &dir)?;
    println!("Man pages generated in {}", dir.display());
    Ok(())
}

/// Render `cmd` as `<stem>.1`, then recurse into its subcommands.
fn render_man(cmd: &Command, stem: &str, dir: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone().name(stem.to_string()))
        .render(&mut buffer)
        .with_context(|| format!("Failed to render {}", stem))?;
    let path = dir.join(format!("{}.1", stem));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());

    for sub in visible(cmd) {
        render_man(sub, &format!("{}-{}", stem, sub.get_name()), dir)?;
    }
    Ok(())
}

fn write_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;
    let cmd = Cli::command();

    let mut md = String::from("# wcgen Command Reference\n\n");
    md.push_str("Generated from the CLI definitions by `cargo xtask gen-docs`.\n\n");
    for sub in visible(&cmd) {
        md.push_str(&format!("- [{0}](#wcgen-{0})\n", sub.get_name()));
    }
    md.push_str("\n---\n\n");

    if let Some(long_about) = cmd.get_long_about() {
        md.push_str(&format!("## wcgen\n\n```\n{}\n```\n\n", long_about));
    }
    for sub in visible(&cmd) {
        document(sub, "wcgen", &mut md);
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, md).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Append one section per command, nested commands included.
fn document(cmd: &Command, parent: &str, md: &mut String) {
    let full = format!("{} {}", parent, cmd.get_name());
    md.push_str(&format!("## {}\n\n", full));
    if let Some(about) = cmd.get_about() {
        md.push_str(&format!("{}\n\n", about));
    }

    let args: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();

    let positional: Vec<_> = args.iter().filter(|a| a.is_positional()).collect();
    if !positional.is_empty() {
        md.push_str("### Arguments\n\n");
        for arg in positional {
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            md.push_str(&format!(
                "- `<{}>`: {}\n",
                arg.get_id().as_str().to_uppercase(),
                help
            ));
        }
        md.push('\n');
    }

    let flags: Vec<_> = args
        .iter()
        .filter(|a| !a.is_positional())
        .filter_map(|a| {
            let flag = match (a.get_short(), a.get_long()) {
                (Some(s), Some(l)) => format!("-{}, --{}", s, l),
                (None, Some(l)) => format!("--{}", l),
                (Some(s), None) => format!("-{}", s),
                (None, None) => return None,
            };
            let help = a.get_help().map(|h| h.to_string()).unwrap_or_default();
            Some((flag, help))
        })
        .collect();
    if !flags.is_empty() {
        md.push_str("### Options\n\n");
        for (flag, help) in flags {
            md.push_str(&format!("- `{}`: {}\n", flag, help));
        }
        md.push('\n');
    }

    if let Some(long_about) = cmd.get_long_about() {
        md.push_str(&format!("### Description\n\n```\n{}\n```\n\n", long_about));
    }

    for sub in visible(cmd) {
        document(sub, &full, md);
    }
}
