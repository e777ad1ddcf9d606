//! `distinct` - select from, diff and patch JSON documents.
//!
//! Usage:
//!   distinct select '<selector>' [--check-circular]   < doc.json
//!   distinct diff <old.json> <new.json> [--up-the-tree]
//!   distinct apply <changes.json> [--events]          < doc.json

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use distinct::cli::{apply_changes, diff_documents, select_document};
use distinct::{ChangeRecord, DiffOptions, EventSink, SelectOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "distinct", about = "Select from, diff and patch JSON documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log diagnostics to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the values matched by a selector in the document on stdin
    Select(SelectArgs),
    /// Print the change list between two documents
    Diff(DiffArgs),
    /// Apply a change list to the document on stdin
    Apply(ApplyArgs),
}

#[derive(Args)]
struct SelectArgs {
    selector: String,
    #[arg(long)]
    check_circular: bool,
}

#[derive(Args)]
struct DiffArgs {
    old: PathBuf,
    new: PathBuf,
    /// Also mark every ancestor of a change
    #[arg(long)]
    up_the_tree: bool,
}

#[derive(Args)]
struct ApplyArgs {
    changes: PathBuf,
    /// Print each applied event name to stderr
    #[arg(long)]
    events: bool,
}

struct StderrSink;

impl EventSink for StderrSink {
    fn emit(&mut self, event: &str, _payload: &ChangeRecord) {
        eprintln!("{event}");
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("reading document from stdin")?;
    Ok(buf)
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let output = match cli.command {
        Command::Select(args) => {
            let options = SelectOptions::new().check_circular(args.check_circular);
            select_document(&read_stdin()?, &args.selector, &options)?
        }
        Command::Diff(args) => {
            let options = DiffOptions::new().changes_up_the_tree(args.up_the_tree);
            diff_documents(&read_file(&args.old)?, &read_file(&args.new)?, &options)?
        }
        Command::Apply(args) => {
            let changes = read_file(&args.changes)?;
            let mut sink = StderrSink;
            let sink: Option<&mut dyn EventSink> = if args.events { Some(&mut sink) } else { None };
            apply_changes(&read_stdin()?, &changes, sink)?
        }
    };
    println!("{output}");
    Ok(())
}
