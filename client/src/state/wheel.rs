//! Wheel-of-names entries and spin progress.

#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

use rand::Rng;
use tools::error::WheelError;
use tools::share::{ToolState, WheelPatch};
use tools::wheel;

/// Longest label accepted from the entry box.
pub const MAX_NAME_LEN: usize = 40;

#[derive(Clone, Debug, PartialEq)]
pub struct WheelState {
    pub names: Vec<String>,
    /// Text in the "add name" box.
    pub draft: String,
    /// Set while the spin animation is running.
    pub spinning: bool,
    /// Cumulative wheel rotation in degrees, fed straight to CSS.
    pub rotation: f64,
    /// Index of the last winner, revealed once the spin finishes.
    pub winner: Option<usize>,
}

impl Default for WheelState {
    fn default() -> Self {
        Self {
            names: ["Alice", "Bob", "Charlie", "Diana"].map(str::to_owned).to_vec(),
            draft: String::new(),
            spinning: false,
            rotation: 0.0,
            winner: None,
        }
    }
}

impl WheelState {
    /// Add the trimmed draft as a new entry. Returns whether it was added.
    pub fn add_draft(&mut self) -> bool {
        let name: String = self.draft.trim().chars().take(MAX_NAME_LEN).collect();
        if name.is_empty() || self.spinning {
            return false;
        }
        self.names.push(name);
        self.draft.clear();
        self.winner = None;
        true
    }

    /// Remove the entry at `index`. Ignored while spinning.
    pub fn remove(&mut self, index: usize) {
        if self.spinning || index >= self.names.len() {
            return;
        }
        self.names.remove(index);
        self.winner = None;
    }

    /// Replace all entries with the lines of `text`.
    pub fn replace_from_text(&mut self, text: &str) {
        if self.spinning {
            return;
        }
        self.names = wheel::parse_names(text);
        self.winner = None;
    }

    /// Pick the winner and start the animation towards it.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::EmptyWheelInput`] when there are no entries.
    pub fn begin_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, WheelError> {
        let index = wheel::spin(&self.names, rng)?;
        // Keep turning forward from wherever the last spin stopped.
        let settled = self.rotation - self.rotation.rem_euclid(360.0);
        self.rotation = settled + wheel::spin_rotation(index, self.names.len(), wheel::SPIN_FULL_TURNS);
        self.spinning = true;
        self.winner = Some(index);
        Ok(index)
    }

    /// Mark the animation as finished.
    pub fn finish_spin(&mut self) {
        self.spinning = false;
    }

    /// Winner's label once the wheel has stopped.
    #[must_use]
    pub fn revealed_winner(&self) -> Option<&str> {
        if self.spinning {
            return None;
        }
        self.winner.and_then(|i| self.names.get(i)).map(String::as_str)
    }

    /// Remove the last winner from the wheel.
    pub fn remove_winner(&mut self) {
        if let Some(index) = self.winner {
            self.remove(index);
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.spinning {
            return;
        }
        wheel::shuffle(&mut self.names, rng);
        self.winner = None;
    }

    pub fn apply_patch(&mut self, patch: &WheelPatch) -> bool {
        let Some(names) = &patch.names else {
            return false;
        };
        self.names.clone_from(names);
        self.winner = None;
        true
    }

    #[must_use]
    pub fn to_state(&self) -> ToolState {
        ToolState::Wheel { names: self.names.clone() }
    }
}
