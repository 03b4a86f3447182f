use serde_json::Value;

use crate::nba::types::SeasonStatRow;


pub const REBOUND_WEIGHT: f64 = 1.2;
pub const ASSIST_WEIGHT: f64 = 1.5;
pub const STEAL_WEIGHT: f64 = 3.0;
pub const BLOCK_WEIGHT: f64 = 3.0;

/// Coerce a loosely-typed stat value to `f64`.
///
/// Numbers pass through, strings are trimmed and parsed, booleans count as
/// 1/0. Anything else, including non-finite results, is `0.0`.
pub fn coerce_stat(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Round to two decimals, ties away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fantasy points from already-coerced per-game averages, unrounded.
pub fn fantasy_points(
    points: f64,
    rebounds: f64,
    assists: f64,
    steals: f64,
    blocks: f64,
    turnovers: f64,
) -> f64 {
    points + REBOUND_WEIGHT * rebounds + ASSIST_WEIGHT * assists + STEAL_WEIGHT * steals
        + BLOCK_WEIGHT * blocks
        - turnovers
}

/// Compute the rounded fantasy score for one season line.
pub fn fantasy_score(row: &SeasonStatRow) -> f64 {
    round_to_cents(fantasy_points(
        coerce_stat(Some(&row.points)),
        coerce_stat(Some(&row.rebounds)),
        coerce_stat(Some(&row.assists)),
        coerce_stat(Some(&row.steals)),
        coerce_stat(Some(&row.blocks)),
        coerce_stat(Some(&row.turnovers)),
    ))
}
