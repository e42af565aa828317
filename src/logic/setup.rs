//! Round setup: turn the names typed on the players screen into a fresh round.

use crate::models::{Course, IdGenerator, Player, Round, RoundError, MAX_PLAYERS};
use chrono::Utc;

/// Trim each name, drop the empty ones, keep the first `MAX_PLAYERS`.
pub fn prepare_player_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|name| {
            let trimmed = name.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .take(MAX_PLAYERS)
        .collect()
}

/// Create a round with one empty score entry per hole. Names are taken as given.
pub fn create_round<I, S>(names: I, hole_count: usize, ids: &mut dyn IdGenerator) -> Round
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let players: Vec<Player> = names
        .into_iter()
        .map(|name| Player::generate(ids, name))
        .collect();
    log::debug!("Creating round: {} player(s), {} hole(s)", players.len(), hole_count);
    Round::new(players, hole_count, Utc::now())
}

/// Clean up `raw_names` and create a round on `course`. Fails only when no name survives.
pub fn begin_round<I, S>(
    raw_names: I,
    course: &Course,
    ids: &mut dyn IdGenerator,
) -> Result<Round, RoundError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names = prepare_player_names(raw_names);
    if names.is_empty() {
        return Err(RoundError::NoPlayers);
    }
    Ok(create_round(names, course.holes, ids))
}
