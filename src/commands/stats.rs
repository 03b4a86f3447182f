//! `stats` command implementation

use serde_json::Value;

use crate::{
    cli::{types::Season, PipelineArgs},
    config::PipelineConfig,
    nba::types::StatsResponse,
    service::StatsService,
    Result,
};

/// Parameters for a one-off lookup
pub struct StatsParams<'a> {
    pub pipeline: &'a PipelineArgs,
    pub name: &'a str,
    pub season: &'a Season,
    pub as_json: bool,
}

/// Render a raw stat for text output; missing values show as `-`.
fn stat_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) if s.trim().is_empty() => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One-line summary of a response.
pub fn format_stats_line(r: &StatsResponse) -> String {
    format!(
        "{} ({}, {}): {} pts, {} reb, {} ast, {} stl, {} blk, {} tov => {:.2} fantasy pts",
        r.player,
        r.team,
        r.season,
        stat_cell(&r.points),
        stat_cell(&r.rebounds),
        stat_cell(&r.assists),
        stat_cell(&r.steals),
        stat_cell(&r.blocks),
        stat_cell(&r.turnovers),
        r.fantasy_score
    )
}

/// Resolve one player and print their season line.
pub async fn handle_stats(params: StatsParams<'_>) -> Result<()> {
    let service = StatsService::from_config(&PipelineConfig::from_args(params.pipeline))?;
    let response = service.player_stats(params.name, params.season).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", format_stats_line(&response));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response() -> StatsResponse {
        StatsResponse {
            player: "LeBron James".to_string(),
            team: "LAL".to_string(),
            season: "2023-24".to_string(),
            points: json!(25.7),
            rebounds: json!("7.3"),
            assists: json!(8.3),
            steals: json!(1.3),
            blocks: Value::Null,
            turnovers: json!(3.5),
            fantasy_score: 47.31,
        }
    }

    #[test]
    fn test_format_stats_line() {
        assert_eq!(
            format_stats_line(&response()),
            "LeBron James (LAL, 2023-24): 25.7 pts, 7.3 reb, 8.3 ast, 1.3 stl, - blk, 3.5 tov => 47.31 fantasy pts"
        );
    }

    #[test]
    fn test_stat_cell() {
        assert_eq!(stat_cell(&json!(12)), "12");
        assert_eq!(stat_cell(&json!("")), "-");
        assert_eq!(stat_cell(&Value::Null), "-");
    }
}
