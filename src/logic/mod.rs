//! Round logic: setup, score edits, totals, leaderboard and summary.

mod leaderboard;
mod scoring;
mod setup;
mod summary;

pub use leaderboard::{compute_leaderboard, LeaderboardEntry};
pub use scoring::{
    adjust_score, compute_totals, has_any_score, hole_has_scores, set_score, PlayerTotal,
};
pub use setup::{begin_round, create_round, prepare_player_names};
pub use summary::{
    compute_summary, format_par_delta, par_for_hole, par_total, running_summary, SummaryEntry,
    NO_SCORES_YET,
};
