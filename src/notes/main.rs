use clap::Parser;
use notes::api::NotesApi;
use notes::config::NotesConfig;
use notes::error::Result;
use notes::logging::init_logging;
use notes::service::NotesService;
use std::sync::Arc;
use tracing::info;

mod args;
mod cli;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = NotesConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    init_logging(&config.log_level)?;

    let command = cli.command.unwrap_or(Commands::Shell);
    if let Commands::Config { template } = command {
        return handle_config(&config, template);
    }

    let environment = config.environment()?;
    let format = config.output_format()?;
    info!(
        %environment,
        version = env!("CARGO_PKG_VERSION"),
        "notes manager starting"
    );

    let api = NotesApi::new(Arc::new(NotesService::in_memory()));
    match command {
        Commands::Run { script } => cli::shell::run_script(api, format, &script),
        _ => cli::shell::run_interactive(api, format),
    }
}

fn handle_config(config: &NotesConfig, template: bool) -> Result<()> {
    if template {
        print!("{}", NotesConfig::template());
    } else {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    Ok(())
}
