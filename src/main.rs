mod cli;
mod commands;
mod domain;
mod services;

use clap::Parser;

use cli::{Cli, Commands};
use domain::error::EngineError;
use domain::models::{ErrorBody, ErrorOut};
use services::storage::{load_config, ItemStore, VersionStore};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let item_store = ItemStore::open(&config)?;
    let version_store = VersionStore::open(&config)?;

    let mut items = item_store.load();
    let mut versions = version_store.load();

    match &cli.command {
        Commands::Version { command } => commands::handle_version_commands(
            cli.json,
            command,
            &item_store,
            &version_store,
            &mut items,
            &mut versions,
        ),
        Commands::Item { command } => {
            commands::handle_item_commands(cli.json, command, &item_store, &mut items, &versions)
        }
    }
}

fn report_failure(json: bool, err: &anyhow::Error) {
    let code = err
        .downcast_ref::<EngineError>()
        .map(EngineError::code)
        .unwrap_or("INTERNAL");
    if json {
        let out = ErrorOut {
            ok: false,
            error: ErrorBody {
                code,
                message: err.to_string(),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {err}"),
        }
    } else {
        eprintln!("error: {err}");
    }
}
