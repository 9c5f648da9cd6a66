//! Tests for wizard/machine

use super::*;
use crate::analysis::{AnalysisError, AnalysisResult};
use crate::test_utils::test_helpers::{FakeClient, sample_result, wizard_at_review};
use proptest::prelude::*;

fn typed(text: &str) -> Wizard {
    let mut wizard = Wizard::default();
    wizard.set_input(text);
    wizard
}

// =========================================================================
// Symptom entry
// =========================================================================

#[test]
fn test_typing_opens_overlay_with_suggestions() {
    let wizard = typed("fe");
    let overlay = &wizard.state().overlay;
    assert!(overlay.is_visible());
    assert_eq!(overlay.suggestions(), &["fever"]);
    assert_eq!(overlay.active_index(), None);
}

#[test]
fn test_blank_input_closes_overlay() {
    let mut wizard = typed("fe");
    wizard.set_input("   ");
    assert!(!wizard.state().overlay.is_visible());
    assert!(wizard.state().overlay.suggestions().is_empty());
}

#[test]
fn test_commit_highlighted_suggestion() {
    let mut wizard = typed("pain");
    wizard.arrow_down();
    wizard.arrow_down();

    assert!(wizard.commit());
    assert_eq!(wizard.state().selection.as_slice(), &["back pain"]);
    assert_eq!(wizard.state().input, "");
    assert!(!wizard.state().overlay.is_visible());
}

#[test]
fn test_commit_exact_text_without_highlight() {
    let mut wizard = typed("Fever, headache");
    assert!(wizard.commit());
    assert_eq!(wizard.state().selection.as_slice(), &["fever", "headache"]);
    assert_eq!(wizard.state().input, "");
    assert_eq!(wizard.state().error, None);
}

#[test]
fn test_commit_unknown_text_reports_no_results() {
    let mut wizard = typed("xyz");
    assert!(!wizard.commit());

    let state = wizard.state();
    assert_eq!(state.error.as_deref(), Some(NO_RESULTS));
    assert!(state.overlay.is_visible());
    assert!(state.overlay.suggestions().is_empty());
    assert_eq!(state.input, "xyz");
    assert!(state.selection.is_empty());
}

#[test]
fn test_commit_substring_without_highlight_fails() {
    let mut wizard = typed("feve");
    assert!(!wizard.commit());
    assert!(wizard.state().selection.is_empty());
}

#[test]
fn test_error_clears_on_next_input_change() {
    let mut wizard = typed("xyz");
    wizard.commit();
    wizard.push_char('z');
    assert_eq!(wizard.state().error, None);
}

#[test]
fn test_selected_symptoms_are_no_longer_suggested() {
    let mut wizard = typed("fever");
    wizard.commit();
    wizard.set_input("fev");
    assert!(wizard.state().overlay.suggestions().is_empty());
}

#[test]
fn test_escape_closes_but_keeps_text_and_selection() {
    let mut wizard = typed("cough");
    wizard.commit();
    wizard.set_input("ch");
    wizard.escape();

    let state = wizard.state();
    assert!(!state.overlay.is_visible());
    assert_eq!(state.input, "ch");
    assert_eq!(state.selection.as_slice(), &["cough"]);
}

#[test]
fn test_arrow_down_after_escape_reopens_stale_list() {
    let mut wizard = typed("chi");
    wizard.escape();
    wizard.arrow_down();
    assert!(wizard.state().overlay.is_visible());
    assert_eq!(wizard.state().overlay.active_suggestion(), Some("chills"));
}

#[test]
fn test_commit_at_pointer_index() {
    let mut wizard = typed("pain");
    assert!(wizard.commit_at(2));
    assert_eq!(wizard.state().selection.as_slice(), &["chest pain"]);
    assert!(!wizard.commit_at(0), "overlay closed after commit");
}

#[test]
fn test_commit_at_out_of_range_is_ignored() {
    let mut wizard = typed("pain");
    assert!(!wizard.commit_at(10));
    assert!(wizard.state().selection.is_empty());
}

#[test]
fn test_click_during_blur_delay_still_commits() {
    let start = Instant::now();
    let mut wizard = typed("pain");
    wizard.blur(start);

    assert!(!wizard.tick(start + Duration::from_millis(50)));
    assert!(wizard.commit_at(0));
    assert_eq!(wizard.state().selection.as_slice(), &["abdominal pain"]);
}

#[test]
fn test_blur_closes_after_delay() {
    let start = Instant::now();
    let mut wizard = typed("pain");
    wizard.blur(start);

    assert!(wizard.tick(start + DEFAULT_BLUR_CLOSE_DELAY));
    assert!(!wizard.state().overlay.is_visible());
    assert_eq!(wizard.state().input, "pain");
}

#[test]
fn test_typing_after_blur_cancels_close() {
    let start = Instant::now();
    let mut wizard = typed("pain");
    wizard.blur(start);
    wizard.push_char('s');
    wizard.set_input("back");

    assert!(!wizard.tick(start + Duration::from_secs(1)));
    assert!(wizard.state().overlay.is_visible());
}

#[test]
fn test_remove_symptom_restores_suggestion() {
    let mut wizard = typed("back pain");
    wizard.commit();
    wizard.set_input("pain");
    assert!(!wizard.state().overlay.suggestions().contains(&"back pain".to_string()));

    assert_eq!(wizard.remove_symptom(0), Some("back pain".to_string()));
    assert!(wizard.state().overlay.suggestions().contains(&"back pain".to_string()));
}

#[test]
fn test_remove_last_symptom() {
    let mut wizard = typed("fever, rash");
    wizard.commit();
    assert_eq!(wizard.remove_last_symptom(), Some("rash".to_string()));
    assert_eq!(wizard.state().selection.as_slice(), &["fever"]);
    assert_eq!(wizard.remove_symptom(5), None);
}

// =========================================================================
// Transitions
// =========================================================================

#[test]
fn test_next_with_only_unknown_text_aborts() {
    let mut wizard = typed("xyz");
    assert!(!wizard.next());
    assert_eq!(wizard.step(), Step::Collecting);
    assert_eq!(wizard.state().error.as_deref(), Some(PICK_FROM_AVAILABLE));
}

#[test]
fn test_next_with_empty_selection_aborts() {
    let mut wizard = Wizard::default();
    assert!(!wizard.next());
    assert_eq!(wizard.step(), Step::Collecting);
    assert_eq!(wizard.state().error.as_deref(), Some(PICK_FROM_AVAILABLE));
}

#[test]
fn test_next_commits_pending_exact_text() {
    let mut wizard = typed("nausea");
    assert!(wizard.next());
    assert_eq!(wizard.step(), Step::Demographics);
    assert_eq!(wizard.state().selection.as_slice(), &["nausea"]);
    assert_eq!(wizard.state().input, "");
    assert_eq!(wizard.state().error, None);
}

#[test]
fn test_next_with_selection_but_bad_pending_text_aborts() {
    let mut wizard = typed("fever");
    wizard.commit();
    wizard.set_input("nonsense");

    assert!(!wizard.next());
    assert_eq!(wizard.step(), Step::Collecting);
    assert_eq!(wizard.state().error.as_deref(), Some(PICK_FROM_AVAILABLE));
}

#[test]
fn test_demographics_to_review_is_unconditional() {
    let mut wizard = typed("fever");
    wizard.next();
    assert!(wizard.next());
    assert_eq!(wizard.step(), Step::Review);
    assert!(!wizard.next(), "review only advances by submitting");
}

#[test]
fn test_back_keeps_demographics() {
    let mut wizard = typed("fever");
    wizard.next();
    wizard.set_age(Some(41));
    wizard.set_gender(Gender::Other);
    wizard.next();

    assert!(wizard.back());
    assert_eq!(wizard.step(), Step::Demographics);
    assert!(wizard.back());
    assert_eq!(wizard.step(), Step::Collecting);
    assert!(!wizard.back());

    assert_eq!(wizard.state().age, Some(41));
    assert_eq!(wizard.state().gender, Gender::Other);
    assert_eq!(wizard.state().selection.as_slice(), &["fever"]);
}

#[test]
fn test_entry_operations_ignored_outside_collecting() {
    let mut wizard = typed("fever");
    wizard.next();
    wizard.set_input("rash");
    assert_eq!(wizard.state().input, "");
    assert!(!wizard.commit());
    assert_eq!(wizard.remove_symptom(0), None);
}

// =========================================================================
// Demographics
// =========================================================================

#[test]
fn test_age_digits() {
    let mut wizard = Wizard::default();
    wizard.push_age_digit('4');
    wizard.push_age_digit('x');
    wizard.push_age_digit('2');
    assert_eq!(wizard.state().age, Some(42));

    wizard.pop_age_digit();
    assert_eq!(wizard.state().age, Some(4));
    wizard.pop_age_digit();
    assert_eq!(wizard.state().age, None);
}

#[test]
fn test_age_rejects_implausible_values() {
    let mut wizard = Wizard::default();
    for ch in "1999".chars() {
        wizard.push_age_digit(ch);
    }
    assert_eq!(wizard.state().age, Some(19));
}

// =========================================================================
// Submission
// =========================================================================

#[test]
fn test_begin_submission_sets_loading_and_builds_request() {
    let mut wizard = wizard_at_review(&["fever", "cough"]);
    wizard.set_age(Some(30));
    wizard.set_gender(Gender::Male);

    let job = wizard.begin_submission().unwrap();
    assert!(wizard.is_loading());
    assert_eq!(job.request.symptoms, vec!["fever", "cough"]);
    assert_eq!(job.request.age, Some(30));
    assert_eq!(job.request.gender, Some(Gender::Male));
}

#[test]
fn test_unspecified_gender_sent_as_none() {
    let mut wizard = wizard_at_review(&["rash"]);
    let job = wizard.begin_submission().unwrap();
    assert_eq!(job.request.gender, None);
    assert_eq!(job.request.age, None);
}

#[test]
fn test_second_submission_refused_while_loading() {
    let mut wizard = wizard_at_review(&["fever"]);
    assert!(wizard.begin_submission().is_some());
    assert!(wizard.begin_submission().is_none());
    assert!(!wizard.back());
}

#[test]
fn test_begin_submission_requires_review() {
    let mut wizard = typed("fever");
    assert!(wizard.begin_submission().is_none());
    assert!(!wizard.is_loading());
}

#[test]
fn test_successful_settle_shows_results() {
    let mut wizard = wizard_at_review(&["fever"]);
    let job = wizard.begin_submission().unwrap();

    assert!(wizard.settle(AnalysisOutcome {
        request_id: job.request_id,
        result: Ok(sample_result("high")),
    }));

    let state = wizard.state();
    assert!(!state.loading);
    assert_eq!(state.step, Step::Results);
    assert_eq!(state.result.as_ref().map(|r| r.severity.as_str()), Some("high"));
}

#[test]
fn test_failed_settle_stays_on_review_and_allows_retry() {
    let mut wizard = wizard_at_review(&["fever"]);
    let job = wizard.begin_submission().unwrap();

    wizard.settle(AnalysisOutcome {
        request_id: job.request_id,
        result: Err("Network error: refused".to_string()),
    });

    assert!(!wizard.is_loading());
    assert_eq!(wizard.step(), Step::Review);
    assert_eq!(wizard.state().error.as_deref(), Some("Network error: refused"));

    let retry = wizard.begin_submission().unwrap();
    assert!(retry.request_id > job.request_id);
    assert_eq!(wizard.state().error, None);
}

#[test]
fn test_stale_outcome_is_ignored() {
    let mut wizard = wizard_at_review(&["fever"]);
    let job = wizard.begin_submission().unwrap();

    assert!(!wizard.settle(AnalysisOutcome {
        request_id: job.request_id + 1,
        result: Ok(sample_result("low")),
    }));
    assert!(wizard.is_loading());
    assert_eq!(wizard.step(), Step::Review);
}

#[test]
fn test_outcome_after_restart_is_discarded() {
    let mut wizard = wizard_at_review(&["fever"]);
    let job = wizard.begin_submission().unwrap();
    wizard.restart();

    assert!(!wizard.settle(AnalysisOutcome {
        request_id: job.request_id,
        result: Ok(sample_result("high")),
    }));
    assert_eq!(wizard.state(), &WizardState::default());
}

#[test]
fn test_outcome_from_before_restart_does_not_match_new_submission() {
    let mut wizard = wizard_at_review(&["fever"]);
    let old = wizard.begin_submission().unwrap();
    wizard.restart();

    wizard.set_input("rash");
    wizard.next();
    wizard.next();
    let new = wizard.begin_submission().unwrap();
    assert_ne!(old.request_id, new.request_id);

    assert!(!wizard.settle(AnalysisOutcome {
        request_id: old.request_id,
        result: Ok(sample_result("high")),
    }));
    assert!(wizard.is_loading());
}

#[test]
fn test_abandon_in_flight_fails_outstanding_submission() {
    let mut wizard = wizard_at_review(&["fever"]);
    wizard.begin_submission().unwrap();

    assert!(wizard.abandon_in_flight("worker gone"));
    assert!(!wizard.is_loading());
    assert_eq!(wizard.step(), Step::Review);
    assert_eq!(wizard.state().error.as_deref(), Some("worker gone"));
    assert!(wizard.begin_submission().is_some(), "resubmit allowed");
}

#[test]
fn test_abandon_in_flight_without_submission_is_noop() {
    let mut wizard = wizard_at_review(&["fever"]);
    assert!(!wizard.abandon_in_flight("worker gone"));
    assert_eq!(wizard.state().error, None);
}

#[test]
fn test_submit_with_fake_client_success() {
    let mut wizard = wizard_at_review(&["fever"]);
    let client = FakeClient::succeeding(sample_result("medium"));

    assert!(wizard.submit_with(&client));
    assert!(!wizard.is_loading());
    assert_eq!(wizard.step(), Step::Results);
}

#[test]
fn test_submit_with_fake_client_failure() {
    let mut wizard = wizard_at_review(&["fever"]);
    let client = FakeClient::failing(AnalysisError::Status {
        code: 500,
        message: "boom".to_string(),
    });

    assert!(wizard.submit_with(&client));
    assert!(!wizard.is_loading());
    assert_eq!(wizard.step(), Step::Review);
    assert_eq!(
        wizard.state().error.as_deref(),
        Some("Analysis service error (500): boom")
    );
}

#[test]
fn test_submit_with_outside_review_does_nothing() {
    let mut wizard = Wizard::default();
    let client = FakeClient::succeeding(AnalysisResult::default());
    assert!(!wizard.submit_with(&client));
    assert!(client.seen_requests().lock().unwrap().is_empty());
}

// =========================================================================
// Restart
// =========================================================================

#[test]
fn test_restart_from_results_resets_everything() {
    let mut wizard = wizard_at_review(&["fever", "chills"]);
    wizard.set_age(Some(70));
    wizard.set_gender(Gender::Female);
    wizard.submit_with(&FakeClient::succeeding(sample_result("high")));
    assert_eq!(wizard.step(), Step::Results);

    wizard.restart();
    assert_eq!(wizard.state(), &WizardState::default());
}

#[derive(Debug, Clone)]
enum Action {
    Type(String),
    Commit,
    Down,
    Up,
    Escape,
    Next,
    Back,
    Age(u32),
    Gender,
    Submit(bool),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(vec!["fe", "pain", "xyz", "cough", "", "rash, fever"])
            .prop_map(|s| Action::Type(s.to_string())),
        Just(Action::Commit),
        Just(Action::Down),
        Just(Action::Up),
        Just(Action::Escape),
        Just(Action::Next),
        Just(Action::Back),
        (0u32..120).prop_map(Action::Age),
        Just(Action::Gender),
        prop::bool::ANY.prop_map(Action::Submit),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_restart_always_returns_initial_state(
        actions in prop::collection::vec(action_strategy(), 0..30)
    ) {
        let mut wizard = Wizard::default();
        for action in actions {
            match action {
                Action::Type(text) => wizard.set_input(text),
                Action::Commit => { wizard.commit(); }
                Action::Down => wizard.arrow_down(),
                Action::Up => wizard.arrow_up(),
                Action::Escape => wizard.escape(),
                Action::Next => { wizard.next(); }
                Action::Back => { wizard.back(); }
                Action::Age(age) => wizard.set_age(Some(age)),
                Action::Gender => {
                    let next = wizard.state().gender.next();
                    wizard.set_gender(next);
                }
                Action::Submit(succeed) => {
                    let client = if succeed {
                        FakeClient::succeeding(sample_result("low"))
                    } else {
                        FakeClient::failing(AnalysisError::Network("down".to_string()))
                    };
                    wizard.submit_with(&client);
                }
            }
            prop_assert!(!wizard.is_loading());
        }

        wizard.restart();
        prop_assert_eq!(wizard.state(), &WizardState::default());
    }

    #[test]
    fn prop_selection_only_holds_vocabulary_entries(
        inputs in prop::collection::vec("[a-z ,]{0,12}", 0..10)
    ) {
        let mut wizard = Wizard::default();
        for input in inputs {
            wizard.set_input(input);
            wizard.arrow_down();
            wizard.commit();
        }
        for symptom in wizard.state().selection.iter() {
            prop_assert!(wizard.vocabulary().contains(symptom));
        }
    }
}
