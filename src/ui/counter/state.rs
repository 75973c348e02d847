//! State for the counter.

use crate::ui::mvi::UiState;

/// Current counter value. Starts at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// The state after one increment. Saturates at `u64::MAX`.
    pub fn incremented(self) -> Self {
        Self {
            value: self.value.saturating_add(1),
        }
    }
}
