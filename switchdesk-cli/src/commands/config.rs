///! CLI configuration commands

use crate::config::Config;
use crate::output;
use anyhow::{bail, Result};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set the default API server
    SetServer {
        /// Server root, e.g. http://localhost:4000
        url: String,
    },
    /// Set the default output format
    SetOutput {
        /// table, json or yaml
        format: String,
    },
}

pub fn handle_config_command(command: ConfigCommands, config: &mut Config) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let path = Config::config_path()?;
            println!("Config file:    {}", path.display());
            println!("Default server: {}", config.default_server);
            println!("Default output: {}", config.default_output);
        }
        ConfigCommands::SetServer { url } => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("Server URL must start with http:// or https://");
            }
            config.default_server = url.trim_end_matches('/').to_string();
            config.save()?;
            output::print_success(&format!("Default server set to {}", config.default_server));
        }
        ConfigCommands::SetOutput { format } => {
            let format = format.to_lowercase();
            if !matches!(format.as_str(), "table" | "json" | "yaml" | "yml") {
                bail!("Unknown output format '{}'", format);
            }
            config.default_output = format;
            config.save()?;
            output::print_success(&format!("Default output set to {}", config.default_output));
        }
    }

    Ok(())
}
