//! Owned state cell with a single mutation funnel.

use std::collections::VecDeque;
use std::marker::PhantomData;

use super::reducer::Reducer;

/// Holds the current state of one reducer and the intents waiting for it.
///
/// There is exactly one owner per state value. Views borrow it through
/// [`Store::state`]; every transition goes through [`Store::dispatch`].
pub struct Store<R: Reducer> {
    state: R::State,
    pending: VecDeque<R::Intent>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            pending: VecDeque::new(),
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Reduce `intent` against the current state and store the result.
    pub fn dispatch(&mut self, intent: R::Intent) -> &R::State {
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        &self.state
    }

    /// Functional update: the new state is computed from the previous one.
    pub fn update_with<F>(&mut self, f: F) -> &R::State
    where
        F: FnOnce(&R::State) -> R::State,
    {
        self.state = f(&self.state);
        &self.state
    }

    /// Queue an intent without applying it.
    pub fn enqueue(&mut self, intent: R::Intent) {
        self.pending.push_back(intent);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued intent in arrival order.
    ///
    /// Each intent is reduced against the result of the previous one, so a
    /// burst queued before the first commit is never collapsed.
    /// Returns the number of intents applied.
    pub fn flush(&mut self) -> usize {
        let mut applied = 0;
        while let Some(intent) = self.pending.pop_front() {
            self.dispatch(intent);
            applied += 1;
        }
        if applied > 0 {
            tracing::debug!(applied, "flushed queued intents");
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Log(Vec<&'static str>);

    impl UiState for Log {}

    struct Push(&'static str);

    impl Intent for Push {}

    struct LogReducer;

    impl Reducer for LogReducer {
        type State = Log;
        type Intent = Push;

        fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
            let mut entries = state.0;
            entries.push(intent.0);
            Log(entries)
        }
    }

    #[test]
    fn default_store_starts_from_default_state() {
        let store = Store::<LogReducer>::default();
        assert_eq!(store.state(), &Log::default());
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn dispatch_applies_immediately() {
        let mut store = Store::<LogReducer>::default();
        let state = store.dispatch(Push("a"));
        assert_eq!(state.0, vec!["a"]);
    }

    #[test]
    fn enqueue_defers_until_flush() {
        let mut store = Store::<LogReducer>::default();
        store.enqueue(Push("a"));
        store.enqueue(Push("b"));
        assert_eq!(store.pending(), 2);
        assert!(store.state().0.is_empty());

        assert_eq!(store.flush(), 2);
        assert_eq!(store.pending(), 0);
        assert_eq!(store.state().0, vec!["a", "b"]);
    }

    #[test]
    fn flush_on_empty_queue_is_noop() {
        let mut store = Store::<LogReducer>::new(Log(vec!["seed"]));
        assert_eq!(store.flush(), 0);
        assert_eq!(store.state().0, vec!["seed"]);
    }

    #[test]
    fn update_with_sees_previous_state() {
        let mut store = Store::<LogReducer>::new(Log(vec!["x"]));
        store.update_with(|prev| {
            let mut entries = prev.0.clone();
            entries.push("y");
            Log(entries)
        });
        assert_eq!(store.state().0, vec!["x", "y"]);
    }
}
