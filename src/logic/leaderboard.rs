//! Live leaderboard over per-player totals.

use crate::logic::scoring::PlayerTotal;
use crate::models::Player;
use serde::Serialize;

/// One leaderboard row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub player: Player,
    pub total: u32,
    /// Strokes behind the first row (0 for the leader and anyone tied with them).
    pub behind: u32,
    /// Only the first row, even when others share its total.
    pub is_leader: bool,
}

/// Rank by ascending total. Equal totals keep their input order.
pub fn compute_leaderboard(totals: &[PlayerTotal]) -> Vec<LeaderboardEntry> {
    let mut sorted = totals.to_vec();
    sorted.sort_by_key(|t| t.total);
    let leader_total = sorted.first().map(|t| t.total).unwrap_or(0);
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, t)| LeaderboardEntry {
            behind: t.total - leader_total,
            is_leader: index == 0,
            player: t.player,
            total: t.total,
        })
        .collect()
}
