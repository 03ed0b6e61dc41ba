use clap::Parser;

use pollbox::cli::{self, Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => cli::handle_serve(host, port).await,
        Command::Config(cmd) => cli::handle_config(cmd),
        Command::Version => {
            cli::print_version();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
