//! Reactive handles for every tool, shared through Leptos context.

use leptos::prelude::*;
use tools::calculator::CalculatorState;
use tools::convert::currency::CurrencyTable;
use tools::router::ToolId;
use tools::share::ToolState;

use crate::state::forms::{CurrencyForm, TimeZoneForm, UnitsForm};
use crate::state::link::ToolStates;
use crate::state::ui::UiState;
use crate::state::wheel::WheelState;

/// One signal per tool so an edit in one widget never re-renders another.
#[derive(Clone, Copy)]
pub struct ToolSignals {
    pub ui: RwSignal<UiState>,
    pub calculator: RwSignal<CalculatorState>,
    pub currency: RwSignal<CurrencyForm>,
    pub units: RwSignal<UnitsForm>,
    pub timezone: RwSignal<TimeZoneForm>,
    pub wheel: RwSignal<WheelState>,
    pub rates: StoredValue<CurrencyTable>,
}

impl ToolSignals {
    pub fn new(states: ToolStates, rates: CurrencyTable) -> Self {
        Self {
            ui: RwSignal::new(states.ui),
            calculator: RwSignal::new(states.calculator),
            currency: RwSignal::new(states.currency),
            units: RwSignal::new(states.units),
            timezone: RwSignal::new(states.timezone),
            wheel: RwSignal::new(states.wheel),
            rates: StoredValue::new(rates),
        }
    }

    /// Current state of `tool`, read without tracking.
    pub fn snapshot(&self, tool: ToolId) -> ToolState {
        match tool {
            ToolId::Calculator => ToolState::Calculator {
                display: self.calculator.with_untracked(|c| c.display.clone()),
            },
            ToolId::Currency => self.currency.with_untracked(CurrencyForm::to_state),
            ToolId::Units => self.units.with_untracked(UnitsForm::to_state),
            ToolId::TimeZone => self.timezone.with_untracked(TimeZoneForm::to_state),
            ToolId::Wheel => self.wheel.with_untracked(WheelState::to_state),
        }
    }
}
