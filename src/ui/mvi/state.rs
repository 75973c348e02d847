//! Base trait for UI state.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (a transition produces a new value)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
