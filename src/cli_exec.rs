use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde_json::json;

use portfolio::notify::ConsoleNotifier;
use portfolio::remote::RemoteClient;
use portfolio::session::AppsSession;
use portfolio::store::LocalStore;
use portfolio::trace::{Trace, TracedNotifier};

use crate::{AppFields, AppsCommands, Commands, RemoteCommands};

mod apps;
mod remote;
mod views;

pub(super) fn handle_command(command: Commands, trace: &mut Trace) -> Result<()> {
    trace.event("command", json!({ "name": command_name(&command) }));
    match command {
        Commands::Init(args) => {
            let root = match args.path {
                Some(p) => p,
                None => std::env::current_dir().context("get current dir")?,
            };
            LocalStore::init(&root, args.force)?;
            println!("Initialized portfolio workspace at {}", root.display());
        }
        Commands::Remote { command } => {
            with_store(|store| remote::handle_remote_command(store, command))?
        }
        Commands::Apps { command } => {
            with_store(|store| apps::handle_apps_command(store, trace, command))?
        }
        Commands::Status(args) => {
            with_store(|store| views::handle_status_command(store, trace, &args.search, args.json))?
        }
        Commands::Submissions(args) => with_store(|store| {
            views::handle_submissions_command(store, trace, &args.search, args.decision, args.json)
        })?,
    }
    Ok(())
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init(_) => "init",
        Commands::Remote { command } => match command {
            RemoteCommands::Show { .. } => "remote show",
            RemoteCommands::Set { .. } => "remote set",
        },
        Commands::Apps { command } => match command {
            AppsCommands::Pull { .. } => "apps pull",
            AppsCommands::List { .. } => "apps list",
            AppsCommands::Show { .. } => "apps show",
            AppsCommands::Add { .. } => "apps add",
            AppsCommands::Edit { .. } => "apps edit",
            AppsCommands::Rm { .. } => "apps rm",
            AppsCommands::Toggle { .. } => "apps toggle",
            AppsCommands::Diff { .. } => "apps diff",
            AppsCommands::Discard => "apps discard",
            AppsCommands::Save { .. } => "apps save",
        },
        Commands::Status(_) => "status",
        Commands::Submissions(_) => "submissions",
    }
}

fn with_store<F>(f: F) -> Result<()>
where
    F: FnOnce(&LocalStore) -> Result<()>,
{
    let store = LocalStore::discover(&std::env::current_dir().context("get current dir")?)?;
    f(&store)
}

fn open_session(store: &LocalStore) -> Result<AppsSession<RemoteClient>> {
    let client = RemoteClient::new(store.require_remote()?)?;
    let buffer = store.read_buffer()?.unwrap_or_default();
    Ok(AppsSession::resume(client, buffer))
}

fn notifier(trace: &mut Trace) -> TracedNotifier<'_, ConsoleNotifier> {
    TracedNotifier::new(ConsoleNotifier, trace)
}

/// Asks on stderr and reads one line from stdin. EOF counts as "no".
fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush().context("flush prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read confirmation")?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn print_json<T: serde::Serialize>(value: &T, label: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", label))?
    );
    Ok(())
}
