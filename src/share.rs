//! Sharing final scores: message text, a fallback chain of delivery channels, and CSV export.

use crate::logic::{compute_totals, par_for_hole, par_total, SummaryEntry};
use crate::models::{Course, Round};
use serde::Serialize;

#[derive(Debug)]
pub enum ShareError {
    Csv(csv::Error),
    Io(std::io::Error),
    Utf8(std::string::FromUtf8Error),
    /// A delivery channel refused the message.
    Channel(String),
}

impl std::fmt::Display for ShareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShareError::Csv(e) => write!(f, "CSV export failed: {}", e),
            ShareError::Io(e) => write!(f, "CSV export failed: {}", e),
            ShareError::Utf8(e) => write!(f, "CSV export produced invalid text: {}", e),
            ShareError::Channel(reason) => write!(f, "Share failed: {}", reason),
        }
    }
}

impl std::error::Error for ShareError {}

impl From<csv::Error> for ShareError {
    fn from(e: csv::Error) -> Self {
        ShareError::Csv(e)
    }
}

/// What gets handed to a share sheet or clipboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ShareMessage {
    pub title: String,
    /// Title line followed by one line per player.
    pub text: String,
    /// Path of the course page, relative to wherever the app is served.
    pub url_path: String,
}

/// Build the share message from summary rows (already best first).
pub fn share_text(course: &Course, summary: &[SummaryEntry]) -> ShareMessage {
    let title = format!("Mini golf scores – {}", course.name);
    let lines = summary.iter().enumerate().map(|(index, entry)| {
        let delta = entry
            .par_delta
            .as_ref()
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        let winner = if index == 0 { " (winner)" } else { "" };
        format!("{}: {}{}{}", entry.player.name, entry.total, delta, winner)
    });
    let text = std::iter::once(title.clone())
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n");
    ShareMessage {
        title,
        text,
        url_path: format!("/{}", course.slug),
    }
}

/// Somewhere a message can be sent: a native share sheet, the clipboard, a plain alert.
pub trait ShareChannel {
    fn name(&self) -> &str;
    fn deliver(&self, message: &ShareMessage) -> Result<(), ShareError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShareOutcome {
    /// Name of the channel that took the message.
    Delivered(String),
    /// Every channel failed, or there were none.
    Dropped,
}

/// Try each channel in order and stop at the first that works.
pub fn share_with_fallback(channels: &[&dyn ShareChannel], message: &ShareMessage) -> ShareOutcome {
    let last = channels.len().saturating_sub(1);
    for (index, channel) in channels.iter().enumerate() {
        match channel.deliver(message) {
            Ok(()) => return ShareOutcome::Delivered(channel.name().to_string()),
            Err(e) if index < last => {
                log::warn!("Share via {} failed, falling back: {}", channel.name(), e);
            }
            Err(e) => log::debug!("Share via {} failed: {}", channel.name(), e),
        }
    }
    ShareOutcome::Dropped
}

/// Hole-by-hole scorecard as CSV: `hole,par,<names>` then one row per hole and a `total` row.
pub fn export_csv(round: &Round, course: &Course) -> Result<String, ShareError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["hole".to_string(), "par".to_string()];
    header.extend(round.players.iter().map(|p| p.name.clone()));
    wtr.write_record(&header)?;

    let blank_or = |v: Option<String>| v.unwrap_or_default();
    for hole in 0..round.hole_count() {
        let mut row = vec![
            (hole + 1).to_string(),
            blank_or(par_for_hole(course, hole).map(|p| p.to_string())),
        ];
        row.extend(
            round
                .players
                .iter()
                .map(|p| blank_or(round.score(hole, &p.id).map(|s| s.to_string()))),
        );
        wtr.write_record(&row)?;
    }

    let mut total_row = vec![
        "total".to_string(),
        blank_or(par_total(course).map(|p| p.to_string())),
    ];
    total_row.extend(
        compute_totals(round, round.hole_count())
            .iter()
            .map(|t| t.total.to_string()),
    );
    wtr.write_record(&total_row)?;

    let bytes = wtr.into_inner().map_err(|e| {
        let inner = e.error();
        ShareError::Io(std::io::Error::new(inner.kind(), inner.to_string()))
    })?;
    String::from_utf8(bytes).map_err(ShareError::Utf8)
}
