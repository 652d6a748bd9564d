//! Notificator CLI entry point

use std::process::ExitCode;

use clap::Parser;

use notificator::cli::{
    app::{init_logging, run_probe, run_send, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use notificator::infrastructure::XdgConfigStore;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Send(args) => run_send(args),
        Commands::Probe => run_probe(),
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            match handle_config_command(action, &store, &presenter) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
    }
}
