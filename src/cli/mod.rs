//! CLI subcommand definitions and handlers.
//!
//! Uses clap derive to define the subcommand hierarchy:
//! - `serve` (default) -- start the poll server
//! - `config show|path` -- inspect configuration
//! - `version` -- print build/version info

use clap::{Parser, Subcommand};

use crate::{config, logging, polls, server};

/// In-memory poll and vote service.
#[derive(Parser, Debug)]
#[command(
    name = "pollbox",
    version = env!("CARGO_PKG_VERSION"),
    about = "pollbox — an in-memory poll and vote service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the poll server (default when no subcommand is given).
    Serve {
        /// Bind address (overrides the config file).
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Inspect configuration.
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print version, build date, and git commit information.
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the fully loaded configuration as JSON.
    Show,

    /// Print the resolved configuration file path.
    Path,
}

// ---------------------------------------------------------------------------
// Subcommand handlers
// ---------------------------------------------------------------------------

/// Run the `serve` subcommand.
pub async fn handle_serve(
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load()?;
    logging::init(cfg.log_level(), cfg.log_format());

    let bind = host.unwrap_or_else(|| cfg.bind().to_string());
    let port = port.unwrap_or_else(|| cfg.port());

    let store = polls::create_store();
    server::serve(&bind, port, store).await?;
    Ok(())
}

/// Run a `config` subcommand.
pub fn handle_config(cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show => {
            let cfg = config::load()?;
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
        }
    }
    Ok(())
}

/// Print version and build information.
pub fn print_version() {
    println!("pollbox {}", env!("CARGO_PKG_VERSION"));
    println!("commit: {}", env!("POLLBOX_GIT_HASH"));
    println!("built:  {}", env!("POLLBOX_BUILD_DATE"));
}
