use portfolio::model::RemoteConfig;

use super::*;

pub(super) fn handle_remote_command(store: &LocalStore, command: RemoteCommands) -> Result<()> {
    match command {
        RemoteCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                print_json(&cfg.remote, "remote")?;
            } else if let Some(remote) = cfg.remote {
                println!("url: {}", remote.base_url);
                println!("environment: {}", remote.environment);
            } else {
                println!("No remote configured");
            }
        }
        RemoteCommands::Set { url, env } => {
            store.set_remote(RemoteConfig {
                base_url: url,
                environment: env.trim().to_ascii_uppercase(),
            })?;
            println!("Remote configured");
        }
    }
    Ok(())
}
