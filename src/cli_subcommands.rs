use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show remote configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Set remote configuration
    Set {
        #[arg(long)]
        url: String,
        /// Environment whose submissions are shown (DEV, TEST, PROD)
        #[arg(long, default_value = portfolio::model::DEFAULT_ENVIRONMENT)]
        env: String,
    },
}

/// Editable application fields. Unset flags leave the field as it is.
#[derive(Args, Default)]
pub(crate) struct AppFields {
    #[arg(long)]
    pub(crate) owner: Option<String>,
    #[arg(long)]
    pub(crate) window: Option<String>,
    #[arg(long)]
    pub(crate) description: Option<String>,
    #[arg(long)]
    pub(crate) impact: Option<String>,
    /// Hosts separated by commas or newlines
    #[arg(long)]
    pub(crate) hosts: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum AppsCommands {
    /// Load applications from the backend
    Pull {
        /// Drop unsaved local changes
        #[arg(long)]
        discard: bool,
    },

    /// List staged applications
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one staged application
    Show {
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Stage a new application
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        change: String,
        #[command(flatten)]
        fields: AppFields,
    },

    /// Stage edits to an application
    Edit {
        name: String,
        /// Rename the application
        #[arg(long = "name")]
        rename: Option<String>,
        #[arg(long)]
        change: Option<String>,
        #[command(flatten)]
        fields: AppFields,
    },

    /// Stage removal of an application
    Rm {
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Enable or disable an application (applied immediately)
    Toggle {
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show unsaved changes
    Diff {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Drop unsaved changes
    Discard,

    /// Save all staged changes to the backend
    Save {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
