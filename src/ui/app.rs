use crate::config::UiConfig;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Store;
use std::time::Duration;

/// Top-level UI model. Owns the counter store; nothing else touches it.
pub struct App {
    should_quit: bool,
    tick_rate: Duration,
    increment_key: char,
    counter: Store<CounterReducer>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            tick_rate: config.tick_rate(),
            increment_key: config.increment_key,
            counter: Store::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn increment_key(&self) -> char {
        self.increment_key
    }

    /// The increment button was pressed. Applied on the next [`App::commit`].
    pub fn press_increment(&mut self) {
        self.counter.enqueue(CounterIntent::Increment);
    }

    /// Apply all queued presses in order. Returns how many were applied.
    pub fn commit(&mut self) -> usize {
        let applied = self.counter.flush();
        if applied > 0 {
            tracing::debug!(applied, value = self.counter_value(), "counter committed");
        }
        applied
    }

    pub fn counter(&self) -> &CounterState {
        self.counter.state()
    }

    pub fn counter_value(&self) -> u64 {
        self.counter().value()
    }

    pub fn pending_increments(&self) -> usize {
        self.counter.pending()
    }
}
