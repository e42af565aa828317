//! Integration tests for par deltas, the summary screen, sharing and CSV export.

use minicard::share::{
    export_csv, share_text, share_with_fallback, ShareChannel, ShareError, ShareMessage,
    ShareOutcome,
};
use minicard::{
    compute_summary, compute_totals, create_round, format_par_delta, par_total, running_summary,
    set_score, Course, Player, PlayerTotal, SequentialIds, NO_SCORES_YET,
};
use std::cell::RefCell;

fn par3() -> Course {
    Course::new("three", "Three Holes", 3).with_par(vec![3, 3, 3])
}

fn total(name: &str, total: u32) -> PlayerTotal {
    PlayerTotal {
        player: Player::new(name.to_lowercase(), name),
        total,
    }
}

#[test]
fn par_delta_formats() {
    let par = par_total(&par3());
    assert_eq!(par, Some(9));
    assert_eq!(format_par_delta(9, par).as_deref(), Some("E"));
    assert_eq!(format_par_delta(11, par).as_deref(), Some("+2"));
    assert_eq!(format_par_delta(7, par).as_deref(), Some("-2"));
}

#[test]
fn no_par_means_no_delta() {
    let course = Course::new("flat", "No Par", 3);
    assert_eq!(par_total(&course), None);
    for t in [0, 9, 40] {
        assert_eq!(format_par_delta(t, par_total(&course)), None);
    }
}

#[test]
fn running_summary_before_and_after_scores() {
    let totals = [total("Ana", 7), total("Ben", 0)];
    assert_eq!(running_summary(&totals, false), NO_SCORES_YET);
    assert_eq!(NO_SCORES_YET, "No scores yet");
    assert_eq!(running_summary(&[], true), "No scores yet");
    assert_eq!(running_summary(&totals, true), "Ana 7 • Ben 0");
}

#[test]
fn summary_marks_all_tied_winners_but_one_trophy() {
    let summary = compute_summary(&[total("A", 8), total("B", 6), total("C", 6)], &par3());
    let order: Vec<_> = summary.iter().map(|e| e.player.name.as_str()).collect();
    assert_eq!(order, ["B", "C", "A"]);
    assert_eq!(summary.iter().map(|e| e.is_winner).collect::<Vec<_>>(), [true, true, false]);
    assert_eq!(summary.iter().map(|e| e.trophy).collect::<Vec<_>>(), [true, false, false]);
    assert_eq!(summary[0].par_delta.as_deref(), Some("-3"));
    assert_eq!(summary[2].par_delta.as_deref(), Some("-1"));
}

#[test]
fn share_text_lists_players_with_deltas() {
    let course = par3();
    let summary = compute_summary(&[total("Ana", 11), total("Ben", 9)], &course);
    let msg = share_text(&course, &summary);
    assert_eq!(msg.title, "Mini golf scores – Three Holes");
    assert_eq!(
        msg.text,
        "Mini golf scores – Three Holes\nBen: 9 (E) (winner)\nAna: 11 (+2)"
    );
    assert_eq!(msg.url_path, "/three");
}

#[test]
fn share_text_without_par() {
    let course = Course::new("flat", "Flat", 2);
    let summary = compute_summary(&[total("Ana", 4)], &course);
    assert_eq!(share_text(&course, &summary).text, "Mini golf scores – Flat\nAna: 4 (winner)");
}

struct Channel {
    name: &'static str,
    works: bool,
    seen: RefCell<Vec<String>>,
}

impl Channel {
    fn new(name: &'static str, works: bool) -> Self {
        Self {
            name,
            works,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ShareChannel for Channel {
    fn name(&self) -> &str {
        self.name
    }

    fn deliver(&self, message: &ShareMessage) -> Result<(), ShareError> {
        self.seen.borrow_mut().push(message.title.clone());
        if self.works {
            Ok(())
        } else {
            Err(ShareError::Channel(format!("{} refused", self.name)))
        }
    }
}

fn message() -> ShareMessage {
    ShareMessage {
        title: "t".to_string(),
        text: "t".to_string(),
        url_path: "/c".to_string(),
    }
}

#[test]
fn share_falls_back_in_order() {
    let native = Channel::new("share", false);
    let clipboard = Channel::new("clipboard", true);
    let alert = Channel::new("alert", true);
    let outcome = share_with_fallback(&[&native, &clipboard, &alert], &message());
    assert_eq!(outcome, ShareOutcome::Delivered("clipboard".to_string()));
    assert_eq!(native.seen.borrow().len(), 1);
    assert!(alert.seen.borrow().is_empty());
}

#[test]
fn share_absorbs_last_failure() {
    let native = Channel::new("share", false);
    let alert = Channel::new("alert", false);
    assert_eq!(share_with_fallback(&[&native, &alert], &message()), ShareOutcome::Dropped);
    assert_eq!(share_with_fallback(&[], &message()), ShareOutcome::Dropped);
}

#[test]
fn csv_export_grid() {
    let course = Course::new("two", "Two", 2).with_par(vec![3]);
    let round = create_round(["Ana", "Ben"], 2, &mut SequentialIds::new("p"));
    let (a, b) = (round.players[0].id.clone(), round.players[1].id.clone());
    let round = set_score(&round, 0, &a, 4).unwrap();
    let round = set_score(&round, 1, &b, 2).unwrap();

    let csv = export_csv(&round, &course).unwrap();
    assert_eq!(csv, "hole,par,Ana,Ben\n1,3,4,\n2,,,2\ntotal,3,4,2\n");
    assert_eq!(compute_totals(&round, 2)[0].total, 4);
}
