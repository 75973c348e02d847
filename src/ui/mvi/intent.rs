//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents describe what happened (a key press, a button click), never how
/// the state should change. Reducers decide that.
pub trait Intent: Send + 'static {}
