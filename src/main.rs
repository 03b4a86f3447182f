//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_fantasy::{
    cli::{Commands, NbaFantasy},
    commands::{handle_serve, handle_stats, StatsParams},
    logging::init_logger,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaFantasy::parse();

    match app.command {
        Commands::Serve {
            pipeline,
            bind,
            allowed_origin,
        } => {
            init_logger(pipeline.verbose);
            handle_serve(&pipeline, &bind, allowed_origin).await?
        }

        Commands::Stats {
            pipeline,
            name,
            season,
            json,
        } => {
            init_logger(pipeline.verbose);
            handle_stats(StatsParams {
                pipeline: &pipeline,
                name: &name,
                season: &season,
                as_json: json,
            })
            .await?
        }
    }

    Ok(())
}
