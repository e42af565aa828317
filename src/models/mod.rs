//! Data structures for the scorecard: players, rounds, courses.

mod course;
mod player;
mod round;

pub use course::{Catalog, Course, Theme};
pub use player::{IdGenerator, Player, PlayerId, SequentialIds, UuidIds};
pub use round::{HoleScores, Round, RoundError, MAX_PLAYERS, MAX_STROKES};
