//! Inbound HTTP API.
//!
//! - `GET /api/stats?name=<player>&season=<YYYY-YY>` returns a `StatsResponse`
//! - `GET /health` is a liveness probe
//!
//! Errors are returned as `{"error": "<message>"}` with 400, 404 or 500.

use serde::{Deserialize, Serialize};
use std::{convert::Infallible, sync::Arc};
use tracing::{error, info, warn};
use warp::{
    filters::cors::CorsForbidden,
    http::StatusCode,
    reply::{json, with_status, Json, WithStatus},
    Filter, Rejection, Reply,
};

use crate::{
    cli::types::Season,
    config::ServerConfig,
    error::StatsError,
    service::StatsService,
};


/// Query parameters of `/api/stats`.
#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub name: Option<String>,
    pub season: Option<String>,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_reply(message: impl Into<String>, status: StatusCode) -> WithStatus<Json> {
    with_status(
        json(&ErrorResponse {
            error: message.into(),
        }),
        status,
    )
}

fn stats_error_reply(err: &StatsError) -> WithStatus<Json> {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %err, "error fetching NBA stats");
    } else {
        info!(status = status.as_u16(), error = %err, "stats request not satisfied");
    }
    error_reply(err.public_message(), status)
}

/// Handle `/api/stats`.
pub async fn get_stats(
    query: StatsQuery,
    service: Arc<StatsService>,
) -> Result<WithStatus<Json>, Infallible> {
    let season = Season::or_default(query.season.as_deref());
    let name = query.name.unwrap_or_default();

    match service.player_stats(&name, &season).await {
        Ok(response) => Ok(with_status(json(&response), StatusCode::OK)),
        Err(err) => Ok(stats_error_reply(&err)),
    }
}

/// Turn unmatched routes and CORS refusals into JSON errors.
pub async fn handle_rejection(rejection: Rejection) -> Result<WithStatus<Json>, Infallible> {
    if rejection.is_not_found() {
        return Ok(error_reply("Not found", StatusCode::NOT_FOUND));
    }
    if let Some(forbidden) = rejection.find::<CorsForbidden>() {
        warn!(reason = %forbidden, "rejected cross-origin request");
        return Ok(error_reply("Origin not allowed", StatusCode::FORBIDDEN));
    }
    if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply("Method not allowed", StatusCode::METHOD_NOT_ALLOWED));
    }
    if rejection.find::<warp::reject::InvalidQuery>().is_some() {
        return Ok(error_reply("Invalid query string", StatusCode::BAD_REQUEST));
    }

    error!(?rejection, "unhandled rejection");
    Ok(error_reply(
        "Internal server error",
        StatusCode::INTERNAL_SERVER_ERROR,
    ))
}

/// Build the API filter. `allowed_origin` must already be a valid origin
/// (see `config::normalize_origin`).
pub fn create_routes(
    service: Arc<StatsService>,
    allowed_origin: &str,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let service_filter = warp::any().map(move || service.clone());

    let stats = warp::path("api")
        .and(warp::path("stats"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<StatsQuery>())
        .and(service_filter)
        .and_then(get_stats);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({ "status": "ok" })));

    stats
        .or(health)
        .with(
            warp::cors()
                .allow_origin(allowed_origin)
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET"]),
        )
        .recover(handle_rejection)
}

/// Serve until Ctrl-C.
pub async fn run(service: Arc<StatsService>, config: &ServerConfig) -> crate::Result<()> {
    let routes = create_routes(service, &config.allowed_origin);

    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(config.bind, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .map_err(|e| StatsError::InvalidConfig {
            message: format!("cannot bind {}: {}", config.bind, e),
        })?;

    info!(%addr, origin = %config.allowed_origin, "serving NBA fantasy stats");
    server.await;
    info!("server stopped");
    Ok(())
}
