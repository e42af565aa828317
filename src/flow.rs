//! Screen progression for a course page: landing, players, scorecard, summary.
//!
//! This sits beside the round model, not inside it. A round has no phases; only the pages do.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Course intro; offers start, or resume/reset when a round is saved.
    #[default]
    Landing,
    /// Collecting player names.
    Players,
    /// Recording strokes hole by hole.
    Scorecard,
    /// Final scores.
    Summary,
}

impl Screen {
    /// First screen when a course page opens.
    pub fn on_open(has_saved_round: bool) -> Self {
        if has_saved_round {
            Screen::Scorecard
        } else {
            Screen::Landing
        }
    }

    /// "Start scorecard" on the landing page.
    pub fn start_players(self) -> Self {
        match self {
            Screen::Landing => Screen::Players,
            other => other,
        }
    }

    /// "Begin round" once names are in and the round was created.
    pub fn begin_round(self) -> Self {
        match self {
            Screen::Players => Screen::Scorecard,
            other => other,
        }
    }

    /// "Resume last round": scorecard if there is a round to resume, players otherwise.
    pub fn resume(self, has_round: bool) -> Self {
        match self {
            Screen::Landing if has_round => Screen::Scorecard,
            Screen::Landing => Screen::Players,
            other => other,
        }
    }

    /// "Finish" or confirming "Complete" on the last hole. The round itself is unchanged.
    pub fn finish(self) -> Self {
        match self {
            Screen::Scorecard => Screen::Summary,
            other => other,
        }
    }

    pub fn back_to_scorecard(self) -> Self {
        match self {
            Screen::Summary => Screen::Scorecard,
            other => other,
        }
    }

    pub fn back_to_landing(self) -> Self {
        match self {
            Screen::Players => Screen::Landing,
            other => other,
        }
    }

    /// Start new round / reset. Allowed anywhere; the caller clears the saved round.
    pub fn start_new_round(self) -> Self {
        Screen::Players
    }
}

/// Step the current hole index, staying inside `0..hole_count`.
pub fn step_hole(current: usize, forward: bool, hole_count: usize) -> usize {
    if forward {
        (current + 1).min(hole_count.saturating_sub(1))
    } else {
        current.saturating_sub(1)
    }
}
