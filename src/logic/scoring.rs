//! Score mutation and per-player totals.

use crate::models::{Player, Round, RoundError, MAX_STROKES};
use serde::Serialize;

/// A player's summed strokes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerTotal {
    pub player: Player,
    pub total: u32,
}

fn clamp_strokes(raw: i64) -> u8 {
    raw.clamp(0, i64::from(MAX_STROKES)) as u8
}

/// Store `raw` (clamped to `0..=MAX_STROKES`) for one cell and return the updated round.
///
/// The input round is untouched. Persisting the result is the caller's job.
pub fn set_score(
    round: &Round,
    hole: usize,
    player_id: &str,
    raw: i64,
) -> Result<Round, RoundError> {
    if !round.scores.contains_key(&hole) {
        return Err(RoundError::HoleOutOfRange {
            hole,
            hole_count: round.hole_count(),
        });
    }
    if round.player(player_id).is_none() {
        return Err(RoundError::PlayerNotFound(player_id.to_string()));
    }
    let strokes = clamp_strokes(raw);
    let mut next = round.clone();
    next.scores
        .entry(hole)
        .or_default()
        .insert(player_id.to_string(), strokes);
    log::debug!("Hole {} player {} -> {}", hole, player_id, strokes);
    Ok(next)
}

/// The +/- control: add `delta` to the current value (unset counts as 0).
pub fn adjust_score(
    round: &Round,
    hole: usize,
    player_id: &str,
    delta: i64,
) -> Result<Round, RoundError> {
    let current = round.score(hole, player_id).map(i64::from).unwrap_or(0);
    set_score(round, hole, player_id, current.saturating_add(delta))
}

/// Sum each player's strokes over holes `0..hole_count`; unset cells count 0. Player order is kept.
pub fn compute_totals(round: &Round, hole_count: usize) -> Vec<PlayerTotal> {
    round
        .players
        .iter()
        .map(|player| {
            let total = (0..hole_count)
                .filter_map(|hole| round.score(hole, &player.id))
                .map(u32::from)
                .sum();
            PlayerTotal {
                player: player.clone(),
                total,
            }
        })
        .collect()
}

/// True once any cell in the round holds a value.
pub fn has_any_score(round: &Round) -> bool {
    round.scores.values().any(|cells| !cells.is_empty())
}

/// True if any listed player has a value on `hole`.
pub fn hole_has_scores(round: &Round, hole: usize) -> bool {
    round
        .players
        .iter()
        .any(|p| round.score(hole, &p.id).is_some())
}
