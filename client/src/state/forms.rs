//! Form state for the three converters.
//!
//! Each form keeps the amount as the raw text the user typed, so a
//! half-typed `"1."` survives re-rendering. Results are computed on demand
//! from the `tools` converters.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use time::Time;
use tools::convert::currency::CurrencyTable;
use tools::convert::timezone::{self, ClockConversion};
use tools::convert::units::{self, UnitCategory};
use tools::convert::{format_quantity, parse_quantity};
use tools::error::ConvertError;
use tools::share::{CurrencyPatch, TimeZonePatch, ToolState, UnitsPatch};

/// Decimal places shown for converted amounts.
pub const CURRENCY_DECIMALS: usize = 2;
pub const UNIT_DECIMALS: usize = 6;

// =============================================================
// Currency
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyForm {
    pub amount: String,
    pub from: String,
    pub to: String,
}

impl Default for CurrencyForm {
    fn default() -> Self {
        Self { amount: "1".to_owned(), from: "USD".to_owned(), to: "EUR".to_owned() }
    }
}

impl CurrencyForm {
    /// Converted amount.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidUnit`] if a selected code is not in `table`.
    pub fn result(&self, table: &CurrencyTable) -> Result<f64, ConvertError> {
        table.convert(parse_quantity(&self.amount), &self.from, &self.to)
    }

    /// Result formatted for display, or the error text.
    #[must_use]
    pub fn result_text(&self, table: &CurrencyTable) -> String {
        self.result(table).map_or_else(|e| e.to_string(), |v| format_quantity(v, CURRENCY_DECIMALS))
    }

    /// "1 USD = 0.92 EUR" line under the result.
    #[must_use]
    pub fn rate_line(&self, table: &CurrencyTable) -> Option<String> {
        let rate = table.quote(&self.from, &self.to).ok()?;
        Some(format!("1 {} = {} {}", self.from, format_quantity(rate, 4), self.to))
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Apply decoded link fields. Codes missing from `table` are skipped.
    /// Returns whether anything changed.
    pub fn apply_patch(&mut self, patch: &CurrencyPatch, table: &CurrencyTable) -> bool {
        let mut changed = false;
        if let Some(amount) = patch.amount {
            self.amount = format_quantity(amount, 10);
            changed = true;
        }
        for (field, value) in [(&mut self.from, &patch.from), (&mut self.to, &patch.to)] {
            if let Some(code) = value.as_deref().filter(|c| table.rate(c).is_ok()) {
                code.clone_into(field);
                changed = true;
            }
        }
        changed
    }

    #[must_use]
    pub fn to_state(&self) -> ToolState {
        ToolState::Currency {
            amount: parse_quantity(&self.amount),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

// =============================================================
// Units
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitsForm {
    pub category: UnitCategory,
    pub value: String,
    pub from: String,
    pub to: String,
}

impl Default for UnitsForm {
    fn default() -> Self {
        let category = UnitCategory::default();
        let (from, to) = category.default_pair();
        Self { category, value: "1".to_owned(), from: from.to_owned(), to: to.to_owned() }
    }
}

impl UnitsForm {
    /// Switch category and reset the unit pair to its defaults.
    pub fn set_category(&mut self, category: UnitCategory) {
        if category == self.category {
            return;
        }
        let (from, to) = category.default_pair();
        self.category = category;
        from.clone_into(&mut self.from);
        to.clone_into(&mut self.to);
    }

    /// Converted value.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidUnit`] if a selected unit is not in the
    /// current category.
    pub fn result(&self) -> Result<f64, ConvertError> {
        units::convert(self.category, parse_quantity(&self.value), &self.from, &self.to)
    }

    #[must_use]
    pub fn result_text(&self) -> String {
        self.result().map_or_else(|e| e.to_string(), |v| format_quantity(v, UNIT_DECIMALS))
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Apply decoded link fields. The category applies first so the unit ids
    /// are checked against the right table.
    pub fn apply_patch(&mut self, patch: &UnitsPatch) -> bool {
        let mut changed = false;
        if let Some(category) = patch.category {
            self.set_category(category);
            changed = true;
        }
        if let Some(value) = patch.value {
            self.value = format_quantity(value, 10);
            changed = true;
        }
        let category = self.category;
        for (field, value) in [(&mut self.from, &patch.from), (&mut self.to, &patch.to)] {
            if let Some(id) = value.as_deref().filter(|id| category.unit(id).is_ok()) {
                id.clone_into(field);
                changed = true;
            }
        }
        changed
    }

    #[must_use]
    pub fn to_state(&self) -> ToolState {
        ToolState::Units {
            category: self.category,
            value: parse_quantity(&self.value),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

// =============================================================
// Time zone
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeZoneForm {
    pub time: Time,
    pub from: String,
    pub to: String,
}

impl Default for TimeZoneForm {
    fn default() -> Self {
        Self {
            time: Time::from_hms(9, 0, 0).unwrap_or(Time::MIDNIGHT),
            from: "America/New_York".to_owned(),
            to: "Europe/London".to_owned(),
        }
    }
}

impl TimeZoneForm {
    /// Converted clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidUnit`] if a selected zone is unknown.
    pub fn result(&self) -> Result<ClockConversion, ConvertError> {
        timezone::convert_clock(self.time, &self.from, &self.to)
    }

    /// `"04:30 (next day)"` style result.
    #[must_use]
    pub fn result_text(&self) -> String {
        match self.result() {
            Ok(out) => {
                let clock = timezone::format_clock(out.time);
                match out.day_shift {
                    0 => clock,
                    1 => format!("{clock} (next day)"),
                    -1 => format!("{clock} (previous day)"),
                    n => format!("{clock} ({n:+} days)"),
                }
            }
            Err(e) => e.to_string(),
        }
    }

    /// Set the time from an `<input type="time">` value; malformed input is
    /// ignored.
    pub fn set_time_text(&mut self, text: &str) {
        if let Some(time) = timezone::parse_clock(text) {
            self.time = time;
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn apply_patch(&mut self, patch: &TimeZonePatch) -> bool {
        let mut changed = false;
        if let Some(time) = patch.time {
            self.time = time;
            changed = true;
        }
        for (field, value) in [(&mut self.from, &patch.from), (&mut self.to, &patch.to)] {
            if let Some(id) = value.as_deref().filter(|id| timezone::zone_by_id(id).is_ok()) {
                id.clone_into(field);
                changed = true;
            }
        }
        changed
    }

    #[must_use]
    pub fn to_state(&self) -> ToolState {
        ToolState::TimeZone { time: self.time, from: self.from.clone(), to: self.to.clone() }
    }
}
