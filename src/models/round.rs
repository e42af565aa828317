//! Round: the players and hole-by-hole strokes of one game on one course.

use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Most players a round can hold.
pub const MAX_PLAYERS: usize = 8;

/// Highest stroke count a cell can hold; values are clamped into `0..=MAX_STROKES`.
pub const MAX_STROKES: u8 = 20;

/// Strokes recorded on one hole.
/// A missing entry means "not entered yet", which is not the same as 0.
pub type HoleScores = BTreeMap<PlayerId, u8>;

/// Errors from round operations. These come from a miswired caller, never from normal play.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoundError {
    /// No usable player names were given.
    NoPlayers,
    /// More than `MAX_PLAYERS` players.
    TooManyPlayers(usize),
    /// Two players share an id.
    DuplicatePlayerId(PlayerId),
    /// Hole index is not part of this round.
    HoleOutOfRange { hole: usize, hole_count: usize },
    /// Hole indices are not exactly `0..hole_count`.
    MissingHole(usize),
    /// Player id is not in the round.
    PlayerNotFound(PlayerId),
    /// A stored value is above `MAX_STROKES`.
    StrokesOutOfRange { hole: usize, strokes: u8 },
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundError::NoPlayers => write!(f, "Add at least one player name"),
            RoundError::TooManyPlayers(n) => {
                write!(f, "A round holds at most {} players (got {})", MAX_PLAYERS, n)
            }
            RoundError::DuplicatePlayerId(id) => write!(f, "Duplicate player id {}", id),
            RoundError::HoleOutOfRange { hole, hole_count } => {
                write!(f, "Hole index {} is outside 0..{}", hole, hole_count)
            }
            RoundError::MissingHole(hole) => write!(f, "Hole {} has no score entry", hole),
            RoundError::PlayerNotFound(_) => write!(f, "Player not found"),
            RoundError::StrokesOutOfRange { hole, strokes } => {
                write!(f, "Hole {} holds {} strokes, max is {}", hole, strokes, MAX_STROKES)
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// One active round. Serializes to the record kept in device storage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Entry order; the default display order.
    pub players: Vec<Player>,
    /// Hole index -> player id -> strokes. Every hole `0..hole_count` has an entry.
    pub scores: BTreeMap<usize, HoleScores>,
    /// Informational only.
    pub created_at: DateTime<Utc>,
}

impl Round {
    /// Round with `hole_count` empty holes.
    pub fn new(players: Vec<Player>, hole_count: usize, created_at: DateTime<Utc>) -> Self {
        let scores = (0..hole_count).map(|i| (i, HoleScores::new())).collect();
        Self {
            players,
            scores,
            created_at,
        }
    }

    /// Fixed at creation.
    pub fn hole_count(&self) -> usize {
        self.scores.len()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Recorded strokes for a cell, `None` if unset.
    pub fn score(&self, hole: usize, player_id: &str) -> Option<u8> {
        self.scores.get(&hole)?.get(player_id).copied()
    }

    /// Check the shape invariants. Used when reading a round back from storage.
    pub fn validate(&self) -> Result<(), RoundError> {
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(RoundError::TooManyPlayers(self.players.len()));
        }
        let mut seen = HashSet::new();
        for p in &self.players {
            if !seen.insert(p.id.as_str()) {
                return Err(RoundError::DuplicatePlayerId(p.id.clone()));
            }
        }
        for (expected, (&hole, cells)) in self.scores.iter().enumerate() {
            if hole != expected {
                return Err(RoundError::MissingHole(expected));
            }
            if let Some(&strokes) = cells.values().find(|&&s| s > MAX_STROKES) {
                return Err(RoundError::StrokesOutOfRange { hole, strokes });
            }
        }
        Ok(())
    }
}
