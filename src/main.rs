//! Word Cloud Generator (wcgen) - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use wcgen::cli::{Cli, Commands, ConfigCommands};
use wcgen::Config;

use commands::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        if let Some(hint) = err.downcast_ref::<wcgen::Error>().and_then(commands::hint) {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    wcgen::logging::init(cli.verbose, &config.logging.level).map_err(anyhow::Error::msg)?;

    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::Generate {
            source,
            options,
            output,
        } => {
            let ctx = Context::new(config, api_url)?;
            commands::generate::handle(&ctx, &source, &options, &output).await
        }
        Commands::Show { id, output } => {
            let ctx = Context::new(config, api_url)?;
            commands::show::handle(&ctx, &id, &output).await
        }
        Commands::Lookup { id, word } => {
            let ctx = Context::new(config, api_url)?;
            commands::lookup::handle(&ctx, &id, &word).await
        }
        Commands::Export { id, format, output } => {
            let ctx = Context::new(config, api_url)?;
            commands::export::handle(&ctx, &id, format, output.as_deref()).await
        }
        Commands::Dashboard { follow } => {
            let ctx = Context::new(config, api_url)?;
            commands::dashboard::handle(&ctx, follow).await
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
    }
}
