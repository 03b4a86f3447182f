//! `serve` command implementation

use std::sync::Arc;

use crate::{
    cli::PipelineArgs,
    config::{PipelineConfig, ServerConfig},
    server,
    service::StatsService,
    Result,
};

/// Build the pipeline and serve HTTP until interrupted.
pub async fn handle_serve(
    pipeline: &PipelineArgs,
    bind: &str,
    allowed_origin: Option<String>,
) -> Result<()> {
    let server_config = ServerConfig::new(bind, allowed_origin)?;
    let service = StatsService::from_config(&PipelineConfig::from_args(pipeline))?;

    server::run(Arc::new(service), &server_config).await
}
