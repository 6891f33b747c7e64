use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use portfolio::trace::Trace;

use crate::Commands;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Application change-approval configuration", long_about = None)]
pub(crate) struct Cli {
    /// Append JSONL trace events to PATH
    #[arg(long, global = true, value_name = "PATH")]
    trace: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut trace = Trace::open(cli.trace.as_deref())?;
    trace.event(
        "session_start",
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "cwd": std::env::current_dir().ok(),
        }),
    );

    let result = crate::cli_exec::handle_command(cli.command, &mut trace);

    trace.event(
        "session_end",
        json!({
            "ok": result.is_ok(),
            "error": result.as_ref().err().map(|e| format!("{:#}", e)),
        }),
    );
    result
}
