use services::StudyLoopService;

use super::test_harness::{setup_letters_harness, setup_view_harness};
use crate::vm::{CardFace, StudyIntent};

#[test]
fn study_view_smoke_renders_first_card() {
    let mut harness = setup_letters_harness();
    harness.rebuild();
    let html = harness.render();

    let term = harness.with_vm(|vm| vm.face_text().to_owned());
    assert!(["A", "B", "C"].contains(&term.as_str()), "unexpected term {term}");
    assert!(html.contains(&term), "missing term {term} in {html}");
    assert!(html.contains("1 of 3"), "missing position in {html}");
    assert!(html.contains("Shuffle"), "missing shuffle in {html}");
    assert!(html.contains("Starred only"), "missing filter in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
}

#[test]
fn study_view_smoke_flip_shows_definition() {
    let mut harness = setup_letters_harness();
    harness.rebuild();

    harness.dispatch(StudyIntent::Flip);
    let html = harness.render();

    let (face, definition) = harness.with_vm(|vm| {
        let entry = vm.session().current().expect("current card");
        (vm.face(), entry.definition().to_owned())
    });
    assert_eq!(face, CardFace::Definition);
    assert!(html.contains(&definition), "missing {definition} in {html}");
    assert!(html.contains("flashcard--revealed"), "missing revealed class in {html}");
}

#[test]
fn study_view_smoke_card_click_flips() {
    let mut harness = setup_letters_harness();
    harness.rebuild();

    harness.click("flashcard");
    assert_eq!(harness.with_vm(|vm| vm.face()), CardFace::Definition);
    assert!(harness.render().contains("flashcard--revealed"));

    harness.click("flashcard");
    assert_eq!(harness.with_vm(|vm| vm.face()), CardFace::Term);
}

#[test]
fn study_view_smoke_star_click_keeps_card_face() {
    let mut harness = setup_letters_harness();
    harness.rebuild();

    harness.click("flashcard__star");
    let html = harness.render();

    assert_eq!(harness.with_vm(|vm| vm.face()), CardFace::Term);
    assert!(harness.with_vm(|vm| vm.is_current_starred()));
    assert!(html.contains("Unstar card"), "missing starred toggle in {html}");
    assert!(!html.contains("flashcard--revealed"), "card flipped in {html}");

    harness.click("flashcard");
    harness.click("flashcard__star");
    assert_eq!(harness.with_vm(|vm| vm.face()), CardFace::Definition);
    assert!(!harness.with_vm(|vm| vm.is_current_starred()));
}

#[test]
fn study_view_smoke_clicks_without_card_change_nothing() {
    let mut harness = setup_letters_harness();
    harness.rebuild();

    harness.dispatch(StudyIntent::SetOnlyStarred(true));
    harness.click("flashcard");
    harness.click("flashcard__star");
    let html = harness.render();

    assert_eq!(harness.with_vm(|vm| vm.face()), CardFace::Term);
    assert!(harness.with_vm(|vm| vm.session().starred().is_empty()));
    assert!(!html.contains("flashcard--revealed"), "empty card flipped in {html}");
    assert!(html.contains("0 of 0"), "missing empty position in {html}");
}

#[test]
fn study_view_smoke_empty_filter_reports_zero() {
    let mut harness = setup_letters_harness();
    harness.rebuild();

    harness.dispatch(StudyIntent::Next);
    harness.dispatch(StudyIntent::SetOnlyStarred(true));
    let html = harness.render();

    assert!(html.contains("0 of 0"), "missing empty position in {html}");
    assert!(html.contains("No starred cards yet"), "missing empty hint in {html}");
}

#[test]
fn study_view_smoke_single_star_filter() {
    let mut harness = setup_letters_harness();
    harness.rebuild();

    harness.dispatch(StudyIntent::Next);
    let starred_term = harness.with_vm(|vm| vm.face_text().to_owned());
    harness.dispatch(StudyIntent::ToggleStar);
    harness.dispatch(StudyIntent::Next);
    harness.dispatch(StudyIntent::SetOnlyStarred(true));
    let html = harness.render();

    assert!(html.contains("1 of 1"), "missing single position in {html}");
    assert!(html.contains("1 / 3"), "missing starred count in {html}");
    assert_eq!(harness.with_vm(|vm| vm.face_text().to_owned()), starred_term);
}

#[test]
fn study_view_smoke_builtin_vocabulary() {
    let study_loop = StudyLoopService::builtin()
        .expect("builtin vocabulary")
        .with_seed(Some(99));
    let mut harness = setup_view_harness(study_loop);
    harness.rebuild();

    harness.dispatch(StudyIntent::Next);
    harness.dispatch(StudyIntent::Next);
    assert!(harness.render().contains("3 of 30"));

    harness.dispatch(StudyIntent::Reshuffle);
    assert!(harness.render().contains("1 of 30"));
}
