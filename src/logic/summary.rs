//! Par deltas and the end-of-round summary.

use crate::logic::scoring::PlayerTotal;
use crate::models::{Course, Player};
use serde::Serialize;

/// Placeholder shown before anyone has a score.
pub const NO_SCORES_YET: &str = "No scores yet";

/// A row on the final scores screen.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub player: Player,
    pub total: u32,
    /// `None` when the course does not track par.
    pub par_delta: Option<String>,
    /// Total equals the best total; several players can share this.
    pub is_winner: bool,
    /// First row only.
    pub trophy: bool,
}

/// Sum of the course's par list. `None` if par is not configured or sums to nothing.
pub fn par_total(course: &Course) -> Option<u32> {
    let total: u32 = course.par.as_ref()?.iter().sum();
    (total > 0).then_some(total)
}

/// Par for one hole, if tracked.
pub fn par_for_hole(course: &Course, hole: usize) -> Option<u32> {
    course.par.as_ref()?.get(hole).copied()
}

/// `"E"`, `"+N"` or `"-N"` against `par_total`; `None` without a par total.
pub fn format_par_delta(total: u32, par_total: Option<u32>) -> Option<String> {
    let delta = i64::from(total) - i64::from(par_total?);
    Some(match delta {
        0 => "E".to_string(),
        d if d > 0 => format!("+{}", d),
        d => d.to_string(),
    })
}

/// Footer line on the scorecard: `"Ana 7 • Ben 9"` in player order.
pub fn running_summary(totals: &[PlayerTotal], has_any_score: bool) -> String {
    if totals.is_empty() || !has_any_score {
        return NO_SCORES_YET.to_string();
    }
    totals
        .iter()
        .map(|t| format!("{} {}", t.player.name, t.total))
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Final scores, best first (stable on ties), with par deltas for `course`.
pub fn compute_summary(totals: &[PlayerTotal], course: &Course) -> Vec<SummaryEntry> {
    let par = par_total(course);
    let mut ordered = totals.to_vec();
    ordered.sort_by_key(|t| t.total);
    let best = ordered.first().map(|t| t.total);
    ordered
        .into_iter()
        .enumerate()
        .map(|(index, t)| {
            let is_winner = best == Some(t.total);
            SummaryEntry {
                par_delta: format_par_delta(t.total, par),
                is_winner,
                trophy: index == 0 && is_winner,
                player: t.player,
                total: t.total,
            }
        })
        .collect()
}
