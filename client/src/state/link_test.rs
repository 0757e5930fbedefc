use tools::share::{ToolState, decode, encode};

use super::*;

fn apply(query: &str) -> (ToolStates, LinkOutcome) {
    let mut states = ToolStates::default();
    let outcome = states.apply_link(&decode(query), &CurrencyTable::reference());
    (states, outcome)
}

// =============================================================
// Tab selection
// =============================================================

#[test]
fn empty_link_changes_nothing() {
    let (states, outcome) = apply("");
    assert_eq!(outcome, LinkOutcome::default());
    assert_eq!(states.ui.active(), ToolId::Currency);
    assert_eq!(outcome.notice(), None);
}

#[test]
fn tool_name_selects_tab() {
    let (states, outcome) = apply("?tool=Wheel+of+Names");
    assert!(outcome.tool_selected);
    assert_eq!(states.ui.active(), ToolId::Wheel);
    assert_eq!(outcome.seeded, None);
}

#[test]
fn unknown_tool_keeps_default_tab() {
    let (states, outcome) = apply("?tool=bogus");
    assert!(!outcome.tool_selected);
    assert_eq!(states.ui.active(), ToolId::Currency);
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn calculator_link_seeds_display() {
    let (states, outcome) = apply("?tool=Calculator&display=12.5");
    assert_eq!(states.calculator.display, "12.5");
    assert_eq!(outcome.seeded, Some(ToolId::Calculator));
    assert_eq!(outcome.notice(), Some("Loaded shared calculation!"));
}

#[test]
fn calculator_link_with_bad_display_is_ignored() {
    let (states, outcome) = apply("?tool=Calculator&display=DROP+TABLE");
    assert_eq!(states.calculator.display, "0");
    assert_eq!(outcome.seeded, None);
}

#[test]
fn fields_apply_only_to_active_tool() {
    let (states, _) = apply("?tool=Calculator&amount=99&display=3");
    assert_eq!(states.currency, CurrencyForm::default());
    assert_eq!(states.calculator.display, "3");
}

#[test]
fn link_without_tool_seeds_default_tab() {
    let (states, outcome) = apply("?amount=5&from=GBP");
    assert_eq!(states.currency.amount, "5");
    assert_eq!(states.currency.from, "GBP");
    assert_eq!(outcome.notice(), Some("Loaded shared settings!"));
}

// =============================================================
// Snapshots
// =============================================================

#[test]
fn shared_state_round_trips_every_tool() {
    let mut original = ToolStates::default();
    original.calculator.load_display("77");
    original.currency.amount = "12".to_owned();
    original.units.set_category(tools::convert::units::UnitCategory::Speed);
    original.wheel.names = vec!["P".to_owned(), "Q".to_owned()];

    let shared = [
        ToolState::Calculator { display: original.calculator.display.clone() },
        original.currency.to_state(),
        original.units.to_state(),
        original.timezone.to_state(),
        original.wheel.to_state(),
    ];
    for state in shared {
        let (restored, _) = apply(&encode(&state));
        assert_eq!(restored.ui.active(), state.tool());
        match state.tool() {
            ToolId::Calculator => assert_eq!(restored.calculator.display, "77"),
            ToolId::Currency => assert_eq!(restored.currency, original.currency),
            ToolId::Units => assert_eq!(restored.units, original.units),
            ToolId::TimeZone => assert_eq!(restored.timezone, original.timezone),
            ToolId::Wheel => assert_eq!(restored.wheel.names, original.wheel.names),
        }
    }
}
