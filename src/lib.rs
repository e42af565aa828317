//! Mini golf scorecard: library with the round model, scoring logic and device-local storage.

pub mod config;
pub mod flow;
pub mod logic;
pub mod models;
pub mod share;
pub mod storage;

pub use flow::Screen;
pub use logic::{
    adjust_score, begin_round, compute_leaderboard, compute_summary, compute_totals, create_round,
    format_par_delta, has_any_score, hole_has_scores, par_for_hole, par_total,
    prepare_player_names, running_summary, set_score, LeaderboardEntry, PlayerTotal, SummaryEntry,
    NO_SCORES_YET,
};
pub use models::{
    Catalog, Course, HoleScores, IdGenerator, Player, PlayerId, Round, RoundError, SequentialIds,
    Theme, UuidIds, MAX_PLAYERS, MAX_STROKES,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore, RoundGateway, StorageError};
