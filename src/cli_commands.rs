use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::{AppsCommands, RemoteCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a workspace (.portfolio)
    Init(InitArgs),

    /// Show or set the backend this workspace talks to
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// Stage, review and save application configuration changes
    Apps {
        #[command(subcommand)]
        command: AppsCommands,
    },

    /// Approval status of enabled applications in the configured environment
    Status(StatusArgs),

    /// Submission history for the configured environment
    Submissions(SubmissionsArgs),
}

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize if .portfolio already exists
    #[arg(long)]
    pub(crate) force: bool,
    /// Path to initialize (defaults to current directory)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct StatusArgs {
    /// Only applications whose name contains this text
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct SubmissionsArgs {
    /// Match app name, change number, approver or comments
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// all|approved|rejected|timed
    #[arg(long, default_value = "all")]
    pub(crate) decision: portfolio::status::DecisionFilter,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
