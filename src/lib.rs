//! Two small demonstrations of state handling.
//!
//! - **[`ui`]**: a counter driven by a Model-View-Intent loop. The state lives
//!   in one owned [`ui::mvi::Store`]; every change goes through a pure reducer
//!   computed from the previous value, so queued key presses are never lost.
//! - **[`immutable`]**: copy-path/share-rest updates over an `Arc`-backed
//!   value tree, the immutable counterpart of assigning into a field or
//!   pushing onto an array.
//!
//! [`config`] and [`logging`] are the ambient pieces shared by both.

pub mod config;
pub mod immutable;
pub mod logging;
pub mod ui;
