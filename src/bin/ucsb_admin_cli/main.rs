//! ucsb-admin-cli: command-line front end for the admin backend.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use clap::Parser;
use ucsb_admin::{config, error::error_chain, telemetry};

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli};
use handlers::{
    articles, help_requests, menu_item_reviews, menu_items, organizations,
    recommendation_requests, whoami,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            for line in error_chain(&err) {
                eprintln!("error: {line}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::load(&cli.overrides)?;
    telemetry::init(&settings.logging)?;
    let ctx = build_ctx_from_cli(&cli, &settings)?;

    match cli.command {
        Commands::Whoami => whoami::handle(&ctx).await,
        Commands::HelpRequests { action } => help_requests::handle(&ctx, action).await,
        Commands::MenuItemReviews { action } => menu_item_reviews::handle(&ctx, action).await,
        Commands::RecommendationRequests { action } => {
            recommendation_requests::handle(&ctx, action).await
        }
        Commands::Organizations { action } => organizations::handle(&ctx, action).await,
        Commands::MenuItems { action } => menu_items::handle(&ctx, action).await,
        Commands::Articles { action } => articles::handle(&ctx, action).await,
    }
}
