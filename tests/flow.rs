//! Integration tests for the course page screen sequence.

use minicard::flow::step_hole;
use minicard::Screen;

#[test]
fn opens_on_scorecard_only_with_a_saved_round() {
    assert_eq!(Screen::on_open(true), Screen::Scorecard);
    assert_eq!(Screen::on_open(false), Screen::Landing);
}

#[test]
fn full_walk_through() {
    let screen = Screen::on_open(false)
        .start_players()
        .begin_round()
        .finish();
    assert_eq!(screen, Screen::Summary);
    assert_eq!(screen.back_to_scorecard(), Screen::Scorecard);
}

#[test]
fn out_of_place_steps_stay_put() {
    assert_eq!(Screen::Landing.finish(), Screen::Landing);
    assert_eq!(Screen::Scorecard.begin_round(), Screen::Scorecard);
    assert_eq!(Screen::Summary.start_players(), Screen::Summary);
    assert_eq!(Screen::Players.back_to_landing(), Screen::Landing);
}

#[test]
fn resume_and_new_round() {
    assert_eq!(Screen::Landing.resume(true), Screen::Scorecard);
    assert_eq!(Screen::Landing.resume(false), Screen::Players);
    for screen in [Screen::Landing, Screen::Players, Screen::Scorecard, Screen::Summary] {
        assert_eq!(screen.start_new_round(), Screen::Players);
    }
}

#[test]
fn hole_stepping_stays_in_bounds() {
    assert_eq!(step_hole(0, false, 9), 0);
    assert_eq!(step_hole(0, true, 9), 1);
    assert_eq!(step_hole(8, true, 9), 8);
    assert_eq!(step_hole(5, false, 9), 4);
}
