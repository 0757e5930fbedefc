use rand::SeedableRng;
use rand::rngs::StdRng;
use tools::share::decode;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(17)
}

// =============================================================
// Entries
// =============================================================

#[test]
fn wheel_default_has_entries_and_no_winner() {
    let state = WheelState::default();
    assert_eq!(state.names.len(), 4);
    assert_eq!(state.winner, None);
    assert!(!state.spinning);
}

#[test]
fn add_draft_trims_and_clears() {
    let mut state = WheelState { draft: "  Eve  ".to_owned(), ..WheelState::default() };
    assert!(state.add_draft());
    assert_eq!(state.names.last().map(String::as_str), Some("Eve"));
    assert!(state.draft.is_empty());
}

#[test]
fn add_draft_rejects_blank() {
    let mut state = WheelState { draft: "   ".to_owned(), ..WheelState::default() };
    assert!(!state.add_draft());
    assert_eq!(state.names.len(), 4);
}

#[test]
fn add_draft_truncates_long_names() {
    let mut state = WheelState { draft: "x".repeat(100), ..WheelState::default() };
    assert!(state.add_draft());
    assert_eq!(state.names.last().map(String::len), Some(MAX_NAME_LEN));
}

#[test]
fn remove_out_of_range_is_ignored() {
    let mut state = WheelState::default();
    state.remove(99);
    assert_eq!(state.names.len(), 4);
}

#[test]
fn replace_from_text_splits_lines() {
    let mut state = WheelState::default();
    state.replace_from_text("Red\n\nGreen\n Blue ");
    assert_eq!(state.names, vec!["Red", "Green", "Blue"]);
}

// =============================================================
// Spinning
// =============================================================

#[test]
fn spin_empty_wheel_fails() {
    let mut state = WheelState { names: Vec::new(), ..WheelState::default() };
    assert_eq!(state.begin_spin(&mut rng()), Err(WheelError::EmptyWheelInput));
    assert!(!state.spinning);
}

#[test]
fn winner_hidden_until_spin_finishes() {
    let mut state = WheelState::default();
    let index = state.begin_spin(&mut rng()).unwrap();
    assert!(state.spinning);
    assert_eq!(state.revealed_winner(), None);
    state.finish_spin();
    assert_eq!(state.revealed_winner(), Some(state.names[index].as_str()));
}

#[test]
fn rotation_only_moves_forward() {
    let mut state = WheelState::default();
    let mut r = rng();
    let mut last = state.rotation;
    for _ in 0..10 {
        state.begin_spin(&mut r).unwrap();
        state.finish_spin();
        assert!(state.rotation > last);
        last = state.rotation;
    }
}

#[test]
fn single_entry_always_wins() {
    let mut state = WheelState { names: vec!["Solo".to_owned()], ..WheelState::default() };
    assert_eq!(state.begin_spin(&mut rng()), Ok(0));
}

#[test]
fn entries_locked_while_spinning() {
    let mut state = WheelState { draft: "Zed".to_owned(), ..WheelState::default() };
    state.begin_spin(&mut rng()).unwrap();
    assert!(!state.add_draft());
    state.remove(0);
    assert_eq!(state.names.len(), 4);
}

#[test]
fn remove_winner_drops_entry() {
    let mut state = WheelState::default();
    let index = state.begin_spin(&mut rng()).unwrap();
    state.finish_spin();
    let name = state.names[index].clone();
    state.remove_winner();
    assert_eq!(state.names.len(), 3);
    assert!(!state.names.contains(&name));
    assert_eq!(state.winner, None);
}

// =============================================================
// Links
// =============================================================

#[test]
fn patch_replaces_names() {
    let mut state = WheelState::default();
    assert!(state.apply_patch(&WheelPatch::from_params(&decode("name=X&name=Y"))));
    assert_eq!(state.names, vec!["X", "Y"]);
}

#[test]
fn empty_patch_keeps_names() {
    let mut state = WheelState::default();
    assert!(!state.apply_patch(&WheelPatch::default()));
    assert_eq!(state, WheelState::default());
}
