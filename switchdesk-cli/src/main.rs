///! SwitchDesk CLI
///!
///! Command-line client for the switch inventory service

mod api;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::config::ConfigCommands;
use commands::switch::SwitchCommands;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// API server address (defaults to the configured server)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Switch(SwitchCommands),
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring unreadable config: {:#}", e);
            config::Config::default()
        }
    };

    let server = cli.server.unwrap_or_else(|| config.default_server.clone());
    let output_format = cli.output.unwrap_or_else(|| config.default_output.clone());
    debug!(%server, %output_format, "resolved settings");

    match cli.command {
        Commands::Switch(command) => {
            let api_client = api::ApiClient::new(&server);
            commands::switch::handle_switch_command(command, &api_client, &output_format).await?
        }
        Commands::Config { command } => {
            commands::config::handle_config_command(command, &mut config)?
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Generate shell completions
fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut io::stdout());
}
