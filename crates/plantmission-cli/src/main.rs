//! PlantMission CLI
//!
//! Terminal front end for the plant care game. All state lives in the core
//! crate; this binary parses arguments and renders markdown.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use plantmission_core::KeeperBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        streak_rule,
        command,
    } = Args::parse();

    let mut builder = KeeperBuilder::new().with_database_path(database_file);
    if let Some(rule) = streak_rule {
        builder = builder.with_streak_rule(rule.into());
    }
    let keeper = builder.build().await.context("Failed to open garden")?;

    info!("PlantMission started");

    let cli = Cli::new(keeper, TerminalRenderer::new(!no_color));
    cli.warn_load_issues()?;

    match command {
        Some(Plant { command }) => cli.handle_plant_command(command).await,
        Some(Mission { command }) => cli.handle_mission_command(command).await,
        Some(Profile) => cli.show_profile().await,
        Some(Badges) => cli.show_badges().await,
        None => cli.show_dashboard().await,
    }
}
