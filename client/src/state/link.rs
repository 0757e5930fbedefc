//! Seeding tool state from a shared link.
//!
//! Links are read once, when the page loads. Each tool takes only the fields
//! it recognizes; anything missing or malformed keeps its default.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use tools::calculator::CalculatorState;
use tools::convert::currency::CurrencyTable;
use tools::router::ToolId;
use tools::share::{CalculatorPatch, CurrencyPatch, SharedParams, TimeZonePatch, UnitsPatch, WheelPatch};

use super::forms::{CurrencyForm, TimeZoneForm, UnitsForm};
use super::ui::UiState;
use super::wheel::WheelState;

/// Initial state for every tool on the page.
#[derive(Clone, Debug, Default)]
pub struct ToolStates {
    pub ui: UiState,
    pub calculator: CalculatorState,
    pub currency: CurrencyForm,
    pub units: UnitsForm,
    pub timezone: TimeZoneForm,
    pub wheel: WheelState,
}

/// What a link changed, for the load notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkOutcome {
    pub tool_selected: bool,
    /// Tool whose fields were seeded from the link, if any.
    pub seeded: Option<ToolId>,
}

impl LinkOutcome {
    /// Banner text for a link that seeded a tool.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self.seeded? {
            ToolId::Calculator => Some("Loaded shared calculation!"),
            _ => Some("Loaded shared settings!"),
        }
    }
}

impl ToolStates {
    /// Apply a decoded link: select the named tab, then seed the fields of
    /// the tool now active.
    pub fn apply_link(&mut self, params: &SharedParams, table: &CurrencyTable) -> LinkOutcome {
        let mut outcome = LinkOutcome::default();
        if params.is_empty() {
            return outcome;
        }
        if let Some(name) = params.tool() {
            let before = self.ui.active();
            outcome.tool_selected = self.ui.tabs.apply_shared(name) != before;
        }
        let tool = self.ui.active();
        let seeded = match tool {
            ToolId::Calculator => CalculatorPatch::from_params(params)
                .display
                .is_some_and(|d| self.calculator.load_display(&d)),
            ToolId::Currency => self.currency.apply_patch(&CurrencyPatch::from_params(params), table),
            ToolId::Units => self.units.apply_patch(&UnitsPatch::from_params(params)),
            ToolId::TimeZone => self.timezone.apply_patch(&TimeZonePatch::from_params(params)),
            ToolId::Wheel => self.wheel.apply_patch(&WheelPatch::from_params(params)),
        };
        if seeded {
            outcome.seeded = Some(tool);
        }
        outcome
    }
}
