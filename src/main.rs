//! flockbook CLI - records for a single sheep farm
//!
//! Usage: flockbook [OPTIONS] [COMMAND]
//!
//! Commands:
//!   dashboard  Stock, pen occupancy, sales total and pending lambings
//!   farm       Farm details
//!   sheep      Sheep register
//!   pen        Pens and occupancy
//!   breeding   Mating and lambing records
//!   health     Prevention and disease records
//!   feed       Feed stock and usage
//!   sale       Sales
//!   check      Report data problems
//!   export     Write a dated JSON backup
//!   reset      Start again from the seed farm

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use flockbook::logging::{init_logging, LogConfig};
use flockbook::presentation::cli::{Cli, Commands};
use flockbook::presentation::open_store;
use flockbook::Config;

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = Config::resolve(cli.config.as_deref())?;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    ui::output::print_config_warnings(&warnings, ui.unicode);

    let log_config = LogConfig::from_verbosity(cli.verbose, config.logging.level)
        .with_format(config.logging.format)
        .with_ansi(ui.color)
        .with_target(cli.verbose >= 3);
    init_logging(&log_config);

    let mut store = open_store(cli.data.as_deref(), &config)?;
    tracing::debug!(location = %store.location(), "store opened");

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => commands::dashboard::cmd_dashboard(&store, &ui),
        Commands::Farm { action } => commands::farm::cmd_farm(&mut store, &ui, action),
        Commands::Sheep { action } => commands::sheep::cmd_sheep(&mut store, &ui, action),
        Commands::Pen { action } => commands::pen::cmd_pen(&mut store, &ui, action),
        Commands::Breeding { action } => {
            commands::breeding::cmd_breeding(&mut store, &ui, action)
        }
        Commands::Health { action } => commands::health::cmd_health(&mut store, &ui, action),
        Commands::Feed { action } => commands::feed::cmd_feed(&mut store, &ui, action),
        Commands::Sale { action } => commands::sale::cmd_sale(&mut store, &ui, action),
        Commands::Check => commands::check::cmd_check(&store, &ui),
        Commands::Export { dir } => commands::export::cmd_export(&store, &ui, dir, &config),
        Commands::Reset { yes } => commands::reset::cmd_reset(&mut store, &ui, yes),
    }
}
